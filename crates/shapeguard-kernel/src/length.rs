//! Length bounds shared by strings and arrays.

use crate::error::ConfigError;

pub(crate) fn validate_bounds(
    min_length: Option<usize>,
    max_length: Option<usize>,
) -> Result<(), ConfigError> {
    if let Some(0) = min_length {
        return Err(ConfigError::InvalidLength {
            option: "minLength",
            value: 0,
        });
    }
    if let Some(0) = max_length {
        return Err(ConfigError::InvalidLength {
            option: "maxLength",
            value: 0,
        });
    }
    if let (Some(min), Some(max)) = (min_length, max_length)
        && min > max
    {
        return Err(ConfigError::InvertedLength { min, max });
    }
    Ok(())
}

/// Requirements violated by `len`. `unit` is the counted noun, if any.
pub(crate) fn violations(
    len: usize,
    min_length: Option<usize>,
    max_length: Option<usize>,
    unit: Option<&str>,
) -> Vec<String> {
    let mut issues = Vec::new();
    match (min_length, max_length) {
        (Some(min), Some(max)) if min == max => {
            if len != min {
                issues.push(format!("must have {}", counted(min, unit)));
            }
        }
        _ => {
            if let Some(min) = min_length
                && len < min
            {
                issues.push(format!("must have a minimum of {}", counted(min, unit)));
            }
            if let Some(max) = max_length
                && len > max
            {
                issues.push(format!("must have a maximum of {}", counted(max, unit)));
            }
        }
    }
    issues
}

fn counted(n: usize, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if n == 1 => format!("{n} {unit}"),
        Some(unit) => format!("{n} {unit}s"),
        None => n.to_string(),
    }
}
