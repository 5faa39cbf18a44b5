use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Lamports in one SOL
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Parse a pubkey from string, with better error messages
pub fn parse_pubkey(s: &str) -> anyhow::Result<Pubkey> {
    Pubkey::from_str(s).map_err(|e| anyhow::anyhow!("Invalid pubkey {}: {}", s, e))
}

/// Format lamports as SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Format a pubkey for display (truncated)
pub fn format_pubkey(pubkey: &Pubkey) -> String {
    let s = pubkey.to_string();
    format!("{}...{}", &s[..4], &s[s.len() - 4..])
}
