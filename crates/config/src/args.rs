// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

/// Global arguments shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// Path to .env file (e.g., .env.devnet)
    #[arg(short, long, default_value = ".env", global = true)]
    pub env_file: String,
}
