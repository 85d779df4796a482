use crate::RfError;

/// Edge and path cost type used throughout the system.
pub type Cost = f64;

/// Cost of an unreached node in a distance table.
pub const UNREACHED: Cost = Cost::INFINITY;

pub fn ensure_finite(v: Cost, what: &'static str) -> Result<Cost, RfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RfError::NonFinite { what, value: v })
    }
}

/// Accept only finite costs `>= 0`. `-0.0` is normalized to `0.0`.
pub fn ensure_non_negative(v: Cost, what: &'static str) -> Result<Cost, RfError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(RfError::Negative { what, value: v });
    }
    Ok(v + 0.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_negative_costs_pass_through(v in 0.0_f64..1.0e9) {
            prop_assert_eq!(ensure_non_negative(v, "cost").unwrap(), v);
        }

        #[test]
        fn negative_costs_rejected(v in -1.0e9_f64..-1.0e-9) {
            prop_assert!(ensure_non_negative(v, "cost").is_err());
        }
    }
}
