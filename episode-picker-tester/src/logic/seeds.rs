use anyhow::{Result, bail};

/// Resolve CLI seed tokens into RNG seeds.
///
/// Accepts decimal integers (negative values use their magnitude) and
/// `0x`-prefixed hex. Duplicates are dropped, keeping first-seen order.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::new();

    for token in tokens {
        let seed = parse_seed(token)?;
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }

    if seeds.is_empty() {
        bail!("at least one seed is required");
    }
    Ok(seeds)
}

fn parse_seed(token: &str) -> Result<u64> {
    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return match u64::from_str_radix(hex, 16) {
            Ok(value) => Ok(value),
            Err(err) => bail!("invalid hex seed '{token}': {err}"),
        };
    }
    if let Ok(value) = token.parse::<u64>() {
        return Ok(value);
    }
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value.unsigned_abs());
    }
    bail!("unrecognised seed '{token}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn resolves_decimal_hex_and_negative_seeds() {
        let seeds = resolve_seed_inputs(&tokens(&["1337", "0xFF", "-5"])).unwrap();
        assert_eq!(seeds, vec![1337, 255, 5]);
    }

    #[test]
    fn duplicates_are_dropped_in_order() {
        let seeds = resolve_seed_inputs(&tokens(&["7", "3", "7", "0x3"])).unwrap();
        assert_eq!(seeds, vec![7, 3]);
    }

    #[test]
    fn garbage_and_empty_inputs_fail() {
        assert!(resolve_seed_inputs(&tokens(&["CL-ORANGE42"])).is_err());
        assert!(resolve_seed_inputs(&tokens(&["0xZZ"])).is_err());
        assert!(resolve_seed_inputs(&[]).is_err());
    }
}
