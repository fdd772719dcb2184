use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML document (chosen by extension) into a typed value.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    let parsed = if is_yaml(&canonical) {
        serde_yaml::from_str(&contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    };
    let value = parsed.map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Resolve relative paths against the working directory and make sure the
/// target is a regular file.
fn resolve_path(path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let canonical = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }
    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatshift_core::savings::SavingsAssumptions;
    use rust_decimal::Decimal;

    fn scratch(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("heatshift-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_yaml_assumptions() {
        let path = scratch("assumptions.yaml", "co2_price: \"60\"\nloan_years: 12\n");
        let a: SavingsAssumptions = read_document(&path).unwrap();
        assert_eq!(a.co2_price, Decimal::from(60));
        assert_eq!(a.loan_years, 12);
    }

    #[test]
    fn reads_json_assumptions() {
        let path = scratch("assumptions.json", r#"{"loan_years": 7}"#);
        let a: SavingsAssumptions = read_document(&path).unwrap();
        assert_eq!(a.loan_years, 7);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_document::<SavingsAssumptions>(Path::new("/no/such/heatshift.json"))
            .unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }
}
