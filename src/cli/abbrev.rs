// Command and dimension abbreviation matching for the Etiqueta CLI

/// Find all commands that start with the given prefix (case-insensitive)
pub fn find_matching_commands<'a>(prefix: &str, commands: &'a [&str]) -> Vec<&'a str> {
    let prefix_lower = prefix.to_lowercase();
    commands.iter()
        .filter(|cmd| cmd.to_lowercase().starts_with(&prefix_lower))
        .copied()
        .collect()
}

/// Find a unique command match for the given prefix
/// Returns Ok(command) if exactly one match, Err(matches) if ambiguous, Err(empty) if no match
/// Exact matches take precedence over prefix matches
pub fn find_unique_command<'a>(prefix: &str, commands: &'a [&str]) -> Result<&'a str, Vec<&'a str>> {
    let prefix_lower = prefix.to_lowercase();
    for cmd in commands {
        if cmd.to_lowercase() == prefix_lower {
            return Ok(*cmd);
        }
    }

    let matches = find_matching_commands(prefix, commands);

    if matches.is_empty() {
        Err(Vec::new())
    } else if matches.len() == 1 {
        Ok(matches[0])
    } else {
        Err(matches)
    }
}

/// Top-level commands in Etiqueta
pub const TOP_LEVEL_COMMANDS: &[&str] = &[
    "resolve", "sort", "table", "tally", "dimensions"
];

/// Dimension names accepted as the first argument of most commands
pub const DIMENSION_NAMES: &[&str] = &[
    "priority", "sprint-status", "task-status", "task-type"
];

/// Whether a top-level command takes a dimension as its first positional argument
fn takes_dimension(command: &str) -> bool {
    matches!(command, "resolve" | "sort" | "table" | "tally")
}

/// Expand command and dimension abbreviations in argument list
/// Returns expanded args or error message
pub fn expand_command_abbreviations(args: Vec<String>) -> Result<Vec<String>, String> {
    let mut iter = args.into_iter();
    let first = match iter.next() {
        Some(first) => first,
        None => return Ok(Vec::new()),
    };

    if first.starts_with('-') {
        return Ok(std::iter::once(first).chain(iter).collect());
    }

    let command = match find_unique_command(&first, TOP_LEVEL_COMMANDS) {
        Ok(full_cmd) => full_cmd,
        Err(matches) if matches.is_empty() => {
            // Unknown command - let clap report it
            return Ok(std::iter::once(first).chain(iter).collect());
        }
        Err(matches) => {
            return Err(format!(
                "Ambiguous command '{}'. Did you mean one of: {}?",
                first,
                matches.join(", ")
            ));
        }
    };

    let mut expanded = vec![command.to_string()];
    if !takes_dimension(command) {
        expanded.extend(iter);
        return Ok(expanded);
    }

    // First non-flag argument is the dimension
    let mut dimension_seen = false;
    for arg in iter {
        if dimension_seen || arg.starts_with('-') {
            expanded.push(arg);
            continue;
        }
        dimension_seen = true;
        match find_unique_command(&arg, DIMENSION_NAMES) {
            Ok(full_dim) => expanded.push(full_dim.to_string()),
            // No prefix match - aliases like "status" are handled by the dimension parser
            Err(matches) if matches.is_empty() => expanded.push(arg),
            Err(matches) => {
                return Err(format!(
                    "Ambiguous dimension '{}'. Did you mean one of: {}?",
                    arg,
                    matches.join(", ")
                ));
            }
        }
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_matching_commands() {
        assert_eq!(find_matching_commands("t", TOP_LEVEL_COMMANDS), vec!["table", "tally"]);
        assert_eq!(find_matching_commands("ta", TOP_LEVEL_COMMANDS), vec!["table", "tally"]);
        assert_eq!(find_matching_commands("tab", TOP_LEVEL_COMMANDS), vec!["table"]);
        assert!(find_matching_commands("x", TOP_LEVEL_COMMANDS).is_empty());
    }

    #[test]
    fn test_find_unique_command() {
        assert_eq!(find_unique_command("r", TOP_LEVEL_COMMANDS), Ok("resolve"));
        assert_eq!(find_unique_command("SORT", TOP_LEVEL_COMMANDS), Ok("sort"));
        assert_eq!(find_unique_command("s", TOP_LEVEL_COMMANDS), Ok("sort"));

        let matches = find_unique_command("task", DIMENSION_NAMES);
        assert_eq!(matches, Err(vec!["task-status", "task-type"]));
    }

    #[test]
    fn test_expand_command_and_dimension() {
        assert_eq!(
            expand_command_abbreviations(args(&["res", "pri", "High"])),
            Ok(args(&["resolve", "priority", "High"]))
        );
        assert_eq!(
            expand_command_abbreviations(args(&["tal", "--json", "sprint", "active"])),
            Ok(args(&["tally", "--json", "sprint-status", "active"]))
        );
        // Codes after the dimension are never expanded
        assert_eq!(
            expand_command_abbreviations(args(&["sort", "task-t", "t", "p"])),
            Ok(args(&["sort", "task-type", "t", "p"]))
        );
    }

    #[test]
    fn test_aliases_pass_through() {
        assert_eq!(
            expand_command_abbreviations(args(&["table", "status"])),
            Ok(args(&["table", "status"]))
        );
        assert_eq!(
            expand_command_abbreviations(args(&["dim", "--json"])),
            Ok(args(&["dimensions", "--json"]))
        );
        assert_eq!(
            expand_command_abbreviations(args(&["--version"])),
            Ok(args(&["--version"]))
        );
        assert_eq!(expand_command_abbreviations(Vec::new()), Ok(Vec::new()));
    }

    #[test]
    fn test_ambiguous_abbreviations() {
        let result = expand_command_abbreviations(args(&["ta", "priority"]));
        assert!(result.unwrap_err().contains("Ambiguous command"));

        let result = expand_command_abbreviations(args(&["table", "task"]));
        assert!(result.unwrap_err().contains("Ambiguous dimension"));
    }
}
