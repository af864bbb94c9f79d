//! Lint: detect key-hint text (`[X]`) drawn without click registration.
//!
//! Anything that looks like a button in the page builders or the shell
//! renderer must be added with `push_clickable()` (or a helper such as
//! `push_cta()`) so it reacts to taps on mobile. A plain `cl.push(...)` with
//! `[1]`-style text renders a button that cannot be tapped.
//!
//! This test scans every source file under `src/pages/` plus
//! `src/site/render.rs` and flags `push(` calls containing bracket keys.

use std::fs;
use std::path::{Path, PathBuf};

/// Whether `s` contains a bracket-key pattern like `[1]`, `[H]`, `[-]`.
fn contains_bracket_key(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(3).any(|w| {
        w[0] == '['
            && w[2] == ']'
            && (w[1].is_alphanumeric() || "-=!~{}|\\←→↑↓".contains(w[1]))
    })
}

/// Lines with a non-clickable `push(` call carrying a bracket key.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }
        if !contains_bracket_key(line) {
            continue;
        }

        let has_push = line.contains(".push(");
        let has_clickable = line.contains("push_clickable(") || line.contains("push_cta(");

        if has_push && !has_clickable {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

fn render_sources() -> Vec<PathBuf> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = vec![root.join("src/site/render.rs")];
    if let Ok(entries) = fs::read_dir(root.join("src/pages")) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|e| e == "rs").unwrap_or(false) {
                files.push(path);
            }
        }
    }
    files
}

#[test]
fn no_bracket_keys_in_non_clickable_push() {
    let files = render_sources();
    assert!(files.len() >= 6, "expected the shell renderer and five pages plus mod.rs");

    let mut all_violations = Vec::new();
    for path in files {
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for (line_num, line) in find_bracket_key_in_push(&source) {
            all_violations.push((path.display().to_string(), line_num, line));
        }
    }

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found bracket-key text [X] in non-clickable push() calls.\n\
             Use push_clickable() or push_cta() instead.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_bracket_key_in_push() {
        let source = r#"cl.push(Line::from(" [1] Главная  [2] Портфолио"));"#;
        assert_eq!(find_bracket_key_in_push(source).len(), 1);
    }

    #[test]
    fn allows_clickable_helpers() {
        let source = r#"cl.push_clickable(Line::from(" [5] Достижения"), go_to(PageId::Achievements));"#;
        assert!(find_bracket_key_in_push(source).is_empty());
        let source = r#"push_cta(&mut cl, "[→] Далее", PageId::Resume, true);"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"// cl.push(Line::from(" [1] Главная"));"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[1]"));
        assert!(contains_bracket_key("[Г]"));
        assert!(contains_bracket_key("[→]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[12]"));
        assert!(!contains_bracket_key("«Урок Цифры»"));
    }
}
