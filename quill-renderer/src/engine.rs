//! Tera engine over a filesystem search root.
//!
//! Template files are discovered and parsed eagerly when the engine is
//! constructed, so cross-template `{% include %}` / `{% extends %}` keep
//! working and malformed templates fail before anything is rendered.

use std::path::{Component, Path, PathBuf};

use tera::Tera;

use crate::error::RenderError;
use crate::vars::TemplateVars;

/// File extensions treated as templates when scanning the search root.
const TEMPLATE_EXTENSIONS: &[&str] = &["j2", "tera"];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}

/// Root-relative template name: forward slashes, no `.` components,
/// case preserved.
fn normalize_template_name(path: &Path) -> String {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            other => parts.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }
    parts.join("/")
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            // Skip VCS and other dot-directories.
            if is_hidden(&path) {
                continue;
            }
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_templates(root: &Path) -> Result<Vec<(String, String)>, RenderError> {
    let mut files = Vec::new();
    collect_template_files(root, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if !is_template_file(&path) {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering template files under a search root.
///
/// Variable lookups are strict: a template reference to a name absent from
/// the supplied [`TemplateVars`] fails with
/// [`RenderError::UndefinedVariable`] rather than substituting an empty
/// value.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading every `.j2` / `.tera`
    /// file found under `search_root`.
    ///
    /// Fails with [`RenderError::Syntax`] if any discovered template is
    /// malformed.
    pub fn new(search_root: &Path) -> Result<Self, RenderError> {
        let templates = load_templates(search_root)?;
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .map_err(|e| RenderError::Syntax { source: e })?;
        Ok(TemplateEngine { tera })
    }

    /// Whether a template with this root-relative path was discovered.
    pub fn has_template(&self, template_path: &str) -> bool {
        let name = normalize_template_name(Path::new(template_path));
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render the named template against `vars`.
    ///
    /// The lookup happens before anything else, so a missing template is
    /// reported as [`RenderError::TemplateNotFound`] with no side effects.
    pub fn render(&self, template_path: &str, vars: &TemplateVars) -> Result<String, RenderError> {
        let name = normalize_template_name(Path::new(template_path));
        if !self.tera.get_template_names().any(|n| n == name) {
            return Err(RenderError::TemplateNotFound { name });
        }
        let context = vars.to_context()?;
        self.tera
            .render(&name, &context)
            .map_err(|e| classify_render_error(&name, e))
    }
}

// ---------------------------------------------------------------------------
// Render error classification
// ---------------------------------------------------------------------------

/// Surface Tera's strict variable lookup as a dedicated error variant.
fn classify_render_error(template: &str, err: tera::Error) -> RenderError {
    if let tera::ErrorKind::TemplateNotFound(name) = &err.kind {
        return RenderError::TemplateNotFound { name: name.clone() };
    }
    if let Some(variable) = undefined_variable(&err) {
        return RenderError::UndefinedVariable {
            variable,
            template: template.to_owned(),
        };
    }
    RenderError::Engine(err)
}

/// Walk the error chain looking for Tera's missing-variable message:
/// ``Variable `name` not found in context while rendering '...'``.
fn undefined_variable(err: &tera::Error) -> Option<String> {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        let message = e.to_string();
        if message.contains("not found in context") {
            if let Some(rest) = message.split('`').nth(1) {
                return Some(rest.to_owned());
            }
        }
        current = e.source();
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_template(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn literal_template_renders_byte_identical() {
        let root = TempDir::new().unwrap();
        let literal = "Static text only\n\nwith a blank line and trailing space \n";
        write_template(root.path(), "docs/README.md.j2", literal);

        let engine = TemplateEngine::new(root.path()).unwrap();
        let rendered = engine
            .render("docs/README.md.j2", &TemplateVars::new())
            .unwrap();
        assert_eq!(rendered, literal);
    }

    #[test]
    fn bound_variable_is_substituted() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "docs/README.md.j2", "Version: {{ version }}");

        let mut vars = TemplateVars::new();
        vars.set("version", "1.0");
        let engine = TemplateEngine::new(root.path()).unwrap();
        let rendered = engine.render("docs/README.md.j2", &vars).unwrap();
        assert_eq!(rendered, "Version: 1.0");
    }

    #[test]
    fn unbound_variable_is_undefined_error() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "docs/README.md.j2", "{{ missing }}");

        let engine = TemplateEngine::new(root.path()).unwrap();
        let err = engine
            .render("docs/README.md.j2", &TemplateVars::new())
            .unwrap_err();
        match err {
            RenderError::UndefinedVariable { variable, template } => {
                assert_eq!(variable, "missing");
                assert_eq!(template, "docs/README.md.j2");
            }
            other => panic!("expected UndefinedVariable, got {other:?}"),
        }
    }

    #[test]
    fn missing_template_is_not_found_error() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "docs/other.j2", "irrelevant");

        let engine = TemplateEngine::new(root.path()).unwrap();
        let err = engine
            .render("docs/README.md.j2", &TemplateVars::new())
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound { name } if name == "docs/README.md.j2"));
    }

    #[test]
    fn malformed_template_fails_engine_construction() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "docs/broken.j2", "{% if %}");

        let err = TemplateEngine::new(root.path()).unwrap_err();
        assert!(matches!(err, RenderError::Syntax { .. }));
    }

    #[test]
    fn include_resolves_across_templates() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "docs/_header.j2", "# Header\n");
        write_template(
            root.path(),
            "docs/README.md.j2",
            "{% include \"docs/_header.j2\" %}Body",
        );

        let engine = TemplateEngine::new(root.path()).unwrap();
        let rendered = engine
            .render("docs/README.md.j2", &TemplateVars::new())
            .unwrap();
        assert_eq!(rendered, "# Header\nBody");
    }

    #[test]
    fn dot_directories_are_not_scanned() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), ".git/sneaky.j2", "{% if %}");
        write_template(root.path(), "docs/README.md.j2", "ok");

        let engine = TemplateEngine::new(root.path()).unwrap();
        assert!(!engine.has_template(".git/sneaky.j2"));
        assert!(engine.has_template("docs/README.md.j2"));
    }

    #[test]
    fn non_template_files_are_ignored() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "src/main.txt", "{{ not a template");
        write_template(root.path(), "docs/README.md.j2", "ok");

        let engine = TemplateEngine::new(root.path()).unwrap();
        assert!(
            engine.render("docs/README.md.j2", &TemplateVars::new()).is_ok(),
            "non-template files must not poison the engine"
        );
    }

    #[test]
    fn template_name_lookup_strips_leading_dot_slash() {
        let root = TempDir::new().unwrap();
        write_template(root.path(), "docs/README.md.j2", "ok");

        let engine = TemplateEngine::new(root.path()).unwrap();
        let rendered = engine
            .render("./docs/README.md.j2", &TemplateVars::new())
            .unwrap();
        assert_eq!(rendered, "ok");
    }

    #[test]
    fn missing_search_root_is_io_error() {
        let root = TempDir::new().unwrap();
        let gone = root.path().join("nope");
        let err = TemplateEngine::new(&gone).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
