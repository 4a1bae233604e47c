use anyhow::{Context, Result};
use std::path::PathBuf;
use uclad_resolver::Resolution;

pub fn execute(file: PathBuf, json: bool) -> Result<()> {
    let resolution = uclad_resolver::resolve(&file)
        .with_context(|| format!("Failed to resolve {}", file.display()))?;

    println!("{}", render(&resolution, json)?);
    Ok(())
}

fn render(resolution: &Resolution, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(resolution)?);
    }

    Ok(format!(
        "class:     {}\nclasspath: {}",
        resolution.qualified_name,
        resolution.classpath().display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uclad_resolver::Namespace;

    fn sample() -> Resolution {
        Resolution {
            qualified_name: "com.example.App".to_string(),
            root_directory: PathBuf::from("/work/src"),
            namespace: Namespace::from_dotted("com.example"),
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render(&sample(), false).unwrap(),
            "class:     com.example.App\nclasspath: /work/src"
        );
    }

    #[test]
    fn test_render_json() {
        let value: serde_json::Value =
            serde_json::from_str(&render(&sample(), true).unwrap()).unwrap();
        assert_eq!(value["qualified_name"], "com.example.App");
        assert_eq!(value["root_directory"], "/work/src");
    }
}
