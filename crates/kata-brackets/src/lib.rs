//! Balanced-bracket validation over the strict alphabet `()[]{}`.
//!
//! The input must consist of brackets only: any other character (including
//! whitespace) makes the input unbalanced by definition, as does an empty
//! input.

#![forbid(unsafe_code)]

/// Returns `true` iff `input` is a non-empty, properly nested bracket
/// sequence.
pub fn is_balanced(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let mut stack = Vec::new();
    for ch in input.chars() {
        match ch {
            '(' | '{' | '[' => stack.push(ch),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            _ => return false,
        }
    }

    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_the_reference_truth_table() {
        let cases: &[(&str, bool)] = &[
            ("()", true),
            ("([])", true),
            ("{[()]}", true),
            ("({[]})", true),
            ("{[()][]({[]})}", true),
            ("{[()]}[({})]({[]})", true),
            ("[({({[({[]})]})})]", true),
            ("{[({[]})]({[]})}", true),
            ("{([([])])({[]})[()()]}", true),
            ("[{()}([]){{([])}}]", true),
            ("(((((((((())))))))))", true),
            ("{([({[({[()]})]})])}", true),
            ("{[({[({[({[()]})]})]})]}", true),
            ("(]", false),
            ("([)]", false),
            ("(", false),
            (")", false),
            ("abc", false),
            ("", false),
            ("({[})", false),
            ("(a)", false),
            ("(123)", false),
            ("123", false),
            ("( )", false),
            (" ()", false),
            ("<>", false),
            ("(\n)", false),
            ("{[()]} ", false),
            ("[({)}]", false),
            ("{[(])}", false),
            ("{[({[({[({[()]})]})])}", false),
            ("{[({[({[({[()]})]})]})]]", false),
            ("{[({[({[({[()]}])})]})]}", false),
            ("[{()}([]){([)]}]", false),
        ];

        for (input, expected) in cases {
            assert_eq!(is_balanced(input), *expected, "input {input:?}");
        }
    }

    #[test]
    fn closing_with_an_empty_stack_is_unbalanced() {
        assert!(!is_balanced(")("));
        assert!(!is_balanced("]["));
        assert!(!is_balanced("}{"));
    }
}
