//! WASM bindings for figcss.
//!
//! A plugin collects its collections, variables and text styles into a
//! plain object and calls `generate()`. The result carries the encoded
//! files, the warnings and a ready-made download page.

use figcss_codegen::{render_download_page, Output};
use figcss_tokens::{Settings, Snapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A generated file as the plugin sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub file_name: String,
    /// Percent-encoded stylesheet.
    pub css: String,
    pub data_uri: String,
}

/// Plugin-facing result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
    pub files: Vec<GeneratedFile>,
    pub warnings: Vec<String>,
    pub html: String,
    pub height: u32,
}

impl From<&Output> for GenerateResult {
    fn from(output: &Output) -> Self {
        let page = render_download_page(output);
        Self {
            files: output
                .files
                .iter()
                .map(|file| GeneratedFile {
                    file_name: file.file_name.clone(),
                    css: file.encoded(),
                    data_uri: file.data_uri(),
                })
                .collect(),
            warnings: output.warnings.iter().map(ToString::to_string).collect(),
            html: page.html,
            height: page.height,
        }
    }
}

/// Run the generator natively, without crossing the JS boundary.
pub fn run(snapshot: &Snapshot, settings: &Settings) -> GenerateResult {
    let output = figcss_codegen::generate(snapshot, settings);
    GenerateResult::from(&output)
}

/// Generate CSS from a document snapshot.
///
/// `snapshot` is `{ variableCollections, variables, textStyles }`;
/// `settings` is optional and may name any subset of the settings fields.
/// Returns `{ files: [{ fileName, css, dataUri }], warnings, html, height }`.
/// Throws a JS error if either argument has the wrong shape.
#[wasm_bindgen]
pub fn generate(snapshot: JsValue, settings: JsValue) -> Result<JsValue, JsError> {
    let snapshot: Snapshot = serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsError::new(&format!("invalid snapshot: {e}")))?;
    let settings: Settings = if settings.is_undefined() || settings.is_null() {
        Settings::default()
    } else {
        serde_wasm_bindgen::from_value(settings)
            .map_err(|e| JsError::new(&format!("invalid settings: {e}")))?
    };
    settings.validate().map_err(|e| JsError::new(&e.to_string()))?;

    let result = run(&snapshot, &settings);
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
}

/// Names of the files a run can produce, in production order.
#[wasm_bindgen(js_name = fileNames)]
pub fn file_names() -> js_sys::Array {
    [
        figcss_codegen::CONFIG_FILE,
        figcss_codegen::PADDINGS_FILE,
        figcss_codegen::MARGINS_FILE,
        figcss_codegen::TYPOGRAPHY_FILE,
        figcss_codegen::MAIN_FILE,
    ]
    .into_iter()
    .map(JsValue::from_str)
    .collect()
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM) — verify the generate pipeline works
    // =========================================================================

    fn native_run(json: &str) -> GenerateResult {
        let snapshot = Snapshot::from_json(json).unwrap();
        run(&snapshot, &Settings::default())
    }

    const SCREEN: &str = r#"{
        "variableCollections": [
            { "id": "c1", "name": "screen", "modes": [
                { "modeId": "1:0", "name": "d" },
                { "modeId": "1:1", "name": "m" }
            ] }
        ],
        "variables": [
            { "name": "space-sm", "variableCollectionId": "c1",
              "valuesByMode": { "1:0": 16, "1:1": 8 } }
        ],
        "textStyles": [
            { "name": "d/title", "fontName": { "family": "Inter", "style": "Bold" },
              "fontSize": 40, "lineHeight": { "unit": "AUTO" },
              "letterSpacing": { "unit": "PERCENT", "value": 0 } },
            { "name": "m/title", "fontName": { "family": "Inter", "style": "Bold" },
              "fontSize": 28, "lineHeight": { "unit": "AUTO" },
              "letterSpacing": { "unit": "PERCENT", "value": 0 } }
        ]
    }"#;

    #[test]
    fn test_empty_snapshot() {
        let result = native_run("{}");
        let names: Vec<&str> = result.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["config.css", "main.css"]);
        assert_eq!(
            result.warnings,
            vec![
                "No \"screen\" collection found".to_string(),
                "No \"d/*\", \"m/*\" text styles found".to_string(),
            ]
        );
    }

    #[test]
    fn test_files_are_encoded() {
        let result = native_run(SCREEN);
        let main = result.files.iter().find(|f| f.file_name == "main.css").unwrap();
        assert!(!main.css.contains(' '));
        assert!(main.css.starts_with("%40import%20%27config.css%27%3B"));
        assert_eq!(
            main.data_uri,
            format!("data:text/plain;charset=utf-8,{}", main.css)
        );
    }

    #[test]
    fn test_full_run() {
        let result = native_run(SCREEN);
        assert_eq!(result.files.len(), 5);
        assert!(result.warnings.is_empty());
        assert!(result.html.contains("download=\"typography.css\""));
        assert_eq!(result.height, 5 * 40 + 20);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = native_run("{}");
        let json = serde_json::to_string(&result.files[0]).unwrap();
        assert!(json.contains("\"fileName\":\"config.css\""));
        assert!(json.contains("\"dataUri\""));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_multiple_runs() {
        // Verify no global state leakage between runs
        let first = native_run(SCREEN);
        let empty = native_run("{}");
        let again = native_run(SCREEN);
        assert_eq!(first, again);
        assert_ne!(first, empty);
    }
}
