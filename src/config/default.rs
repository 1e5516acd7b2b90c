// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commitgate configuration file

# Rule configuration
[rules]
# Longest subject line accepted, in characters.
max_subject_length = 72

# Output configuration
[ui]
color = true
emoji = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, GateConfig};

    #[test]
    fn test_example_config_parses() {
        let config = parse_config(example_config()).unwrap();
        assert_eq!(config, GateConfig::default());
    }
}
