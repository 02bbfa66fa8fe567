//! Signals command handler

use crate::cli::output::{format_signals_json, format_signals_table};
use crate::cli::SignalsArgs;
use crate::signals;

/// Handle `triage signals` command
pub fn handle_signals(args: &SignalsArgs) -> String {
    let signals = signals::extract(&args.content);

    if args.json {
        format_signals_json(&signals)
    } else {
        format_signals_table(&signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_reports_matched_flags() {
        let args = SignalsArgs {
            content: "use opus: first analyze, then deploy".to_string(),
            json: true,
        };
        let parsed: serde_json::Value = serde_json::from_str(&handle_signals(&args)).unwrap();
        assert_eq!(parsed["signals"]["explicit_premium"], true);
        assert_eq!(parsed["signals"]["multi_step"], true);
        assert_eq!(parsed["signals"]["long_content"], false);
    }

    #[test]
    fn table_output_renders() {
        let args = SignalsArgs {
            content: "hello".to_string(),
            json: false,
        };
        let table = handle_signals(&args);
        assert!(table.contains("Signal"));
        assert!(table.contains("no"));
    }
}
