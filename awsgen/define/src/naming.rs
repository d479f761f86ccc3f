//! Name conversions shared by model loading and code generation.
//!
//! Service models name operations and errors in UpperCamelCase
//! (`SendMessage`, `ThrottlingException`). Generated Rust needs several
//! derived spellings of those names:
//!
//! - lower camel case for normalized error names (`throttlingException`)
//! - snake case for functions and modules (`send_message`)
//! - upper snake case for constants (`THROTTLING_EXCEPTION`)
//! - kebab case for crate directories (`simple-queue`)
//!
//! ## Examples
//!
//! ```
//! use awsgen_define::naming::{to_snake_case, upper_to_lower_camel_case};
//!
//! assert_eq!(to_snake_case("DescribeDBInstances"), "describe_db_instances");
//! assert_eq!(upper_to_lower_camel_case("AccessDenied"), "accessDenied");
//! ```

/// Splits a CamelCase string into individual words.
///
/// Handles various CamelCase patterns:
/// - "SendMessage" -> ["Send", "Message"]
/// - "DescribeDBInstances" -> ["Describe", "DB", "Instances"]
/// - "HTTPClient" -> ["HTTP", "Client"]
/// - "GetS3Object" -> ["Get", "S3", "Object"]
/// - "queue" -> ["queue"]
pub fn split_camel_case(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let chars: Vec<(usize, char)> = s.char_indices().collect();

    for i in 1..chars.len() {
        let (offset, current) = chars[i];
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());

        // "sendMessage" -> "send", "Message"
        // "HTTPClient" -> "HTTP", "Client"
        // "S3Object" -> "S3", "Object"
        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || (prev.is_ascii_digit() && next_is_lower)
                || (prev.is_uppercase() && next_is_lower));

        if is_new_word {
            if offset > word_start {
                words.push(&s[word_start..offset]);
            }
            word_start = offset;
        }
    }

    if word_start < s.len() {
        words.push(&s[word_start..]);
    }

    words
}

/// Lowercases the first character, leaving the rest untouched.
pub fn upper_to_lower_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn lower_to_upper_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a CamelCase name to snake_case.
pub fn to_snake_case(s: &str) -> String {
    split_camel_case(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts a CamelCase name to UPPER_SNAKE_CASE.
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Converts a CamelCase name to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_camel_case_multi_word() {
        assert_eq!(split_camel_case("SendMessage"), vec!["Send", "Message"]);
    }

    #[test]
    fn split_camel_case_with_acronym() {
        assert_eq!(
            split_camel_case("DescribeDBInstances"),
            vec!["Describe", "DB", "Instances"]
        );
        assert_eq!(split_camel_case("HTTPClient"), vec!["HTTP", "Client"]);
    }

    #[test]
    fn split_camel_case_with_digits() {
        assert_eq!(split_camel_case("GetS3Object"), vec!["Get", "S3", "Object"]);
        assert_eq!(split_camel_case("EC2"), vec!["EC2"]);
    }

    #[test]
    fn split_camel_case_lowercase() {
        assert_eq!(split_camel_case("queue"), vec!["queue"]);
    }

    #[test]
    fn split_camel_case_empty() {
        assert_eq!(split_camel_case(""), Vec::<&str>::new());
    }

    #[test]
    fn lower_camel_case_only_touches_first_character() {
        assert_eq!(
            upper_to_lower_camel_case("ThrottlingException"),
            "throttlingException"
        );
        assert_eq!(upper_to_lower_camel_case("AccessDenied"), "accessDenied");
        assert_eq!(upper_to_lower_camel_case(""), "");
    }

    #[test]
    fn upper_camel_case_round_trips_normalized_names() {
        assert_eq!(
            lower_to_upper_camel_case("throttlingException"),
            "ThrottlingException"
        );
        assert_eq!(lower_to_upper_camel_case(""), "");
    }

    #[test]
    fn snake_case_conversions() {
        assert_eq!(to_snake_case("ListQueues"), "list_queues");
        assert_eq!(to_snake_case("SimpleQueue"), "simple_queue");
        assert_eq!(to_snake_case("DynamoDB"), "dynamo_db");
        assert_eq!(to_snake_case("throttlingException"), "throttling_exception");
    }

    #[test]
    fn upper_snake_and_kebab_case() {
        assert_eq!(to_upper_snake_case("AccessDenied"), "ACCESS_DENIED");
        assert_eq!(to_kebab_case("SimpleNotification"), "simple-notification");
    }
}
