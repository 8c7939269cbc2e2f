//! The table of languages the editor and the execution relay understand.
//!
//! One row per language: display name, the name/version the Piston engine
//! wants, the id the browser editor wants, starter code, and formatting
//! preferences. The table is fixed at compile time; lookups are
//! case-insensitive over both the display name and the engine name.

#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub name: String,
    pub piston_language: String,
    pub piston_version: String,
    pub editor_language: String,
    pub boilerplate: String,
    pub tab_size: u8,
    pub insert_spaces: bool,
}

pub fn builtin_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            name: "JavaScript".into(),
            piston_language: "javascript".into(),
            piston_version: "18.15.0".into(),
            editor_language: "javascript".into(),
            boilerplate: r#"// JavaScript Boilerplate
// Write your code here

function main() {
  // Your main code goes here
}

main();"#
                .into(),
            tab_size: 2,
            insert_spaces: true,
        },
        LanguageConfig {
            name: "Python".into(),
            piston_language: "python".into(),
            piston_version: "3.10.0".into(),
            editor_language: "python".into(),
            boilerplate: r#"# Python Boilerplate
# Write your code here

def main():
    # Your main code goes here
    pass

if __name__ == "__main__":
    main()"#
                .into(),
            tab_size: 4,
            insert_spaces: true,
        },
        LanguageConfig {
            name: "Java".into(),
            piston_language: "java".into(),
            piston_version: "15.0.2".into(),
            editor_language: "java".into(),
            boilerplate: r#"// Java Boilerplate
public class Main {
    public static void main(String[] args) {
        // Write your code here
    }
}"#
            .into(),
            tab_size: 4,
            insert_spaces: true,
        },
        LanguageConfig {
            name: "C++".into(),
            piston_language: "c++".into(),
            piston_version: "10.2.0".into(),
            editor_language: "cpp".into(),
            boilerplate: r#"// C++ Boilerplate
#include <iostream>

int main() {
    // Write your code here
    return 0;
}"#
            .into(),
            tab_size: 2,
            insert_spaces: true,
        },
    ]
}

/// Find a language by display name or engine name, ignoring case.
pub fn find_language<'a>(langs: &'a [LanguageConfig], name: &str) -> Option<&'a LanguageConfig> {
    langs.iter().find(|l| {
        l.name.eq_ignore_ascii_case(name) || l.piston_language.eq_ignore_ascii_case(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_languages_present() {
        let langs = builtin_languages();
        let names: Vec<&str> = langs.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["JavaScript", "Python", "Java", "C++"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let langs = builtin_languages();
        assert!(find_language(&langs, "JavaScript").is_some());
        assert!(find_language(&langs, "javascript").is_some());
        assert!(find_language(&langs, "PYTHON").is_some());
    }

    #[test]
    fn lookup_accepts_engine_names() {
        let langs = builtin_languages();
        let cpp = find_language(&langs, "c++").unwrap();
        assert_eq!(cpp.name, "C++");
        // the editor id is not a lookup key
        assert!(find_language(&langs, "cpp").is_none());
    }

    #[test]
    fn unknown_language_is_none() {
        let langs = builtin_languages();
        assert!(find_language(&langs, "cobol").is_none());
        assert!(find_language(&langs, "").is_none());
    }

    #[test]
    fn engine_versions_are_pinned() {
        let langs = builtin_languages();
        let version_of = |n: &str| find_language(&langs, n).unwrap().piston_version.clone();
        assert_eq!(version_of("JavaScript"), "18.15.0");
        assert_eq!(version_of("Python"), "3.10.0");
        assert_eq!(version_of("Java"), "15.0.2");
        assert_eq!(version_of("C++"), "10.2.0");
    }

    #[test]
    fn starter_code_matches_formatting_prefs() {
        let langs = builtin_languages();
        let py = find_language(&langs, "Python").unwrap();
        assert_eq!(py.tab_size, 4);
        assert!(py.boilerplate.contains("if __name__"));
        let js = find_language(&langs, "JavaScript").unwrap();
        assert_eq!(js.tab_size, 2);
        assert!(js.boilerplate.contains("function main()"));
    }
}
