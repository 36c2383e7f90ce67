use axum::extract::{rejection::QueryRejection, Query};

use crate::error::RequestError;
use crate::operations::Operation;

/// Every `key=value` pair of the query string, in order, repeats included.
pub type QueryPairs = Query<Vec<(String, String)>>;

/// Query parameters as they arrive, before integer parsing.
#[derive(Debug, Default)]
pub struct Params {
    pub a: Option<String>,
    pub b: Option<String>,
}

/// Operands after parsing and default substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

impl Params {
    /// Collects `a` and `b` from the query. The first occurrence of a repeated
    /// key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Params::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "a" => &mut params.a,
                "b" => &mut params.b,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn from_query(
        operation: Operation,
        query: Result<QueryPairs, QueryRejection>,
    ) -> Result<Self, RequestError> {
        match query {
            Ok(Query(pairs)) => Ok(Self::from_pairs(pairs)),
            Err(rejection) => Err(RequestError::InvalidQuery {
                operation,
                message: rejection.body_text(),
            }),
        }
    }

    pub fn operands(&self, operation: Operation) -> Result<Operands, RequestError> {
        let (default_a, default_b) = operation.defaults();
        Ok(Operands {
            a: parse_param(operation, "a", self.a.as_deref(), default_a)?,
            b: parse_param(operation, "b", self.b.as_deref(), default_b)?,
        })
    }
}

/// The default only stands in for an absent parameter. A present value that
/// is not a decimal `i64` is an error, including the empty string.
pub fn parse_param(
    operation: Operation,
    name: &'static str,
    raw: Option<&str>,
    default: i64,
) -> Result<i64, RequestError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .parse()
            .map_err(|_| RequestError::InvalidParameter {
                operation,
                name,
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(a: Option<&str>, b: Option<&str>) -> Params {
        Params {
            a: a.map(str::to_string),
            b: b.map(str::to_string),
        }
    }

    fn pairs(query: &[(&str, &str)]) -> Vec<(String, String)> {
        query
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_first_repeated_key_wins() {
        let params = Params::from_pairs(pairs(&[
            ("a", "1"),
            ("a", "2"),
            ("b", "3"),
            ("b", "x"),
        ]));

        assert_eq!(
            params.operands(Operation::Division),
            Ok(Operands { a: 1, b: 3 })
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params = Params::from_pairs(pairs(&[("c", "oops"), ("b", "4")]));

        assert_eq!(params.a, None);
        assert_eq!(params.b.as_deref(), Some("4"));
    }

    #[test]
    fn test_absent_parameters_take_defaults() {
        assert_eq!(
            Params::default().operands(Operation::Division),
            Ok(Operands { a: 0, b: 1 })
        );
        assert_eq!(
            Params::default().operands(Operation::Multiplication),
            Ok(Operands { a: 0, b: 0 })
        );
    }

    #[test]
    fn test_parses_signed_integers() {
        assert_eq!(
            params(Some("-7"), Some("+3")).operands(Operation::Multiplication),
            Ok(Operands { a: -7, b: 3 })
        );
        assert_eq!(
            params(Some(" 42 "), None).operands(Operation::Division),
            Ok(Operands { a: 42, b: 1 })
        );
    }

    #[test]
    fn test_malformed_value_is_not_treated_as_absent() {
        let result = params(Some("10"), Some("two")).operands(Operation::Division);

        assert_eq!(
            result,
            Err(RequestError::InvalidParameter {
                operation: Operation::Division,
                name: "b",
                value: "two".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_and_fractional_values_are_rejected() {
        for raw in ["", " ", "1.5", "0x10", "1e3"] {
            let result = parse_param(Operation::Multiplication, "a", Some(raw), 0);
            assert!(
                matches!(result, Err(RequestError::InvalidParameter { name: "a", .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let result = parse_param(
            Operation::Multiplication,
            "a",
            Some("9223372036854775808"),
            0,
        );

        assert!(result.is_err());
        assert_eq!(
            parse_param(Operation::Multiplication, "a", Some("9223372036854775807"), 0),
            Ok(i64::MAX)
        );
    }
}
