//! Content-based hashing for run IDs.

use crate::ResultsResult;
use rf_model::ReservoirParameters;
use sha2::{Digest, Sha256};

pub fn compute_run_id(
    params: &ReservoirParameters,
    sample_count: usize,
    model_version: &str,
) -> ResultsResult<String> {
    let mut hasher = Sha256::new();

    let params_json = serde_json::to_string(params)?;
    hasher.update(params_json.as_bytes());
    hasher.update(sample_count.to_le_bytes());
    hasher.update(model_version.as_bytes());

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_model::{ParameterField, RawParameters, validate};

    #[test]
    fn hash_stability() {
        let params = validate(&RawParameters::default()).unwrap();
        let hash1 = compute_run_id(&params, 300, "v1").unwrap();
        let hash2 = compute_run_id(&params, 300, "v1").unwrap();
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let base = validate(&RawParameters::default()).unwrap();
        let other =
            validate(&RawParameters::default().with(ParameterField::FlowRate, 501.0)).unwrap();

        let id = compute_run_id(&base, 300, "v1").unwrap();
        assert_ne!(id, compute_run_id(&other, 300, "v1").unwrap());
        assert_ne!(id, compute_run_id(&base, 301, "v1").unwrap());
        assert_ne!(id, compute_run_id(&base, 300, "v2").unwrap());
    }
}
