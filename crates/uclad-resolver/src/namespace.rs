use crate::error::{ResolveError, Result};
use std::fmt;
use tracing::debug;

const PACKAGE_KEYWORD: &str = "package";

/// Declarations that end the search for a package clause.
const TYPE_KEYWORDS: [&str; 3] = ["public class", "class", "interface"];

/// The package a source file declares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Namespace {
    /// No package clause: the file lives in the unnamed package.
    #[default]
    Unnamed,
    /// Dotted package name split into its segments.
    Declared(Vec<String>),
}

impl Namespace {
    pub fn from_dotted(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return Namespace::Unnamed;
        }
        Namespace::Declared(name.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        match self {
            Namespace::Unnamed => &[],
            Namespace::Declared(segments) => segments,
        }
    }

    /// Number of directories the package adds below the classpath root.
    pub fn depth(&self) -> usize {
        self.segments().len()
    }

    pub fn is_unnamed(&self) -> bool {
        self.segments().is_empty()
    }

    /// Fully-qualified name of `entry` inside this namespace.
    pub fn qualify(&self, entry: &str) -> String {
        if self.is_unnamed() {
            entry.to_string()
        } else {
            format!("{}.{}", self, entry)
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("."))
    }
}

/// Scans `source` for a `package` clause.
///
/// Every line is handled the same way: blank lines are skipped, a `package`
/// line ends the scan with its name, a class or interface declaration ends it
/// with [`Namespace::Unnamed`], and anything else (comments, imports,
/// annotations) is passed over. This is a line scanner, not a Java parser, so
/// block comments and multi-line package clauses are not understood.
pub fn extract_namespace(source: &str) -> Result<Namespace> {
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim_start_matches([' ', '\t']);
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = strip_keyword(line, PACKAGE_KEYWORD) {
            let end = rest
                .find(';')
                .ok_or_else(|| ResolveError::MalformedDeclaration {
                    line: index + 1,
                    text: line.trim_end().to_string(),
                })?;

            let mut name = &rest[..end];
            if let Some(comment) = name.find("//") {
                name = &name[..comment];
            }

            let namespace = Namespace::from_dotted(name);
            debug!("Found package declaration `{}` on line {}", namespace, index + 1);
            return Ok(namespace);
        }

        if TYPE_KEYWORDS
            .iter()
            .any(|keyword| strip_keyword(line, keyword).is_some())
        {
            debug!("Reached type declaration on line {} without a package", index + 1);
            break;
        }
    }

    Ok(Namespace::Unnamed)
}

/// Returns the text after `keyword` when the line starts with it as a whole word.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.starts_with([' ', '\t']) {
        Some(rest)
    } else {
        None
    }
}
