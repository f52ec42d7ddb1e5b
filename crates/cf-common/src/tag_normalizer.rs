use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Skill alias → canonical form mapping (O(1) lookup).
///
/// Profiles carry free-text skill tags typed by users, so the same skill
/// arrives as "js", "JS", "JavaScript" or "java script". Values and industry
/// tags are not alias-mapped; only case/width folding applies to them.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        (
            "javascript",
            &["js", "javascript", "java script", "ecmascript", "es6"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("nodejs", &["node.js", "node js", "nodejs", "node"]),
        ("react", &["reactjs", "react.js", "react js", "react"]),
        ("vue", &["vue.js", "vuejs", "vue"]),
        ("nextjs", &["next.js", "nextjs", "next js"]),
        ("python", &["python3", "python 3", "py", "python"]),
        ("golang", &["go", "golang", "go lang"]),
        ("rust", &["rust lang", "rust language", "rust"]),
        ("java", &["java8", "java11", "openjdk", "java"]),
        ("csharp", &["c#", "c sharp", "csharp", ".net", "dotnet"]),
        ("postgresql", &["postgres", "pg", "postgresql"]),
        ("mysql", &["my sql", "mysql", "mariadb"]),
        ("mongodb", &["mongo", "mongo db", "mongodb"]),
        ("aws", &["amazon web services", "amazon aws", "aws cloud", "aws"]),
        ("gcp", &["google cloud platform", "google cloud", "gcp"]),
        ("azure", &["microsoft azure", "ms azure", "azure"]),
        ("docker", &["containerization", "docker container", "docker"]),
        ("kubernetes", &["k8s", "kube", "kubernetes"]),
        ("ai", &["artificial intelligence", "ai"]),
        ("ml", &["machine learning", "ml"]),
        (
            "design",
            &["ui design", "ux design", "ui/ux", "product design", "design"],
        ),
        (
            "marketing",
            &["growth marketing", "digital marketing", "growth hacking", "marketing"],
        ),
        ("sales", &["business development", "bizdev", "b2b sales", "sales"]),
        (
            "product",
            &["product management", "product manager", "pm", "product"],
        ),
        (
            "fundraising",
            &["fund raising", "venture capital", "fundraising"],
        ),
        ("finance", &["financial modeling", "accounting", "finance"]),
        ("operations", &["ops", "biz ops", "operations"]),
        ("mobile", &["ios", "android", "mobile development", "mobile"]),
        ("data", &["data science", "data analytics", "data engineering", "data"]),
        ("blockchain", &["web3", "crypto", "smart contracts", "blockchain"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

/// Collapse separators so "Node.JS" / "node js" / "node-js" share one key.
fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/'))
        .collect()
}

fn match_canonical(token: &str) -> Option<&'static str> {
    if token.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some(canonical);
    }

    let compact = compact_key(token);
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        if compact_key(alias) == compact {
            return Some(canonical);
        }
    }

    fuzzy_match_canonical(&compact)
}

/// Tolerate a single typo against known aliases, but only for tokens long
/// enough that one edit cannot jump between real skills ("go" vs "gcp").
fn fuzzy_match_canonical(compact: &str) -> Option<&'static str> {
    if compact.chars().count() < 5 {
        return None;
    }

    let mut best: Option<(&'static str, usize)> = None;
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        let alias_compact = compact_key(alias);
        if alias_compact.chars().count() < 5 {
            continue;
        }
        let distance = damerau_levenshtein(compact, &alias_compact);
        if distance <= 1 {
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((canonical, distance)),
            }
        }
    }

    best.map(|(canonical, _)| canonical)
}

/// Canonical form of a single skill tag. Unknown skills pass through folded
/// but otherwise untouched, preserving the free-text taxonomy.
pub fn normalize_skill(skill: &str) -> String {
    let folded = nfkc_lower_trim(skill);
    match match_canonical(&folded) {
        Some(canonical) => canonical.to_string(),
        None => folded,
    }
}

pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|skill| normalize_skill(skill))
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Case/width folding for value and industry tags. No alias table: those
/// vocabularies are open-ended and overlap is judged literally.
pub fn normalize_tag(tag: &str) -> String {
    nfkc_lower_trim(tag)
}

pub fn normalize_tag_set(tags: &[String]) -> HashSet<String> {
    tags.iter()
        .map(|tag| normalize_tag(tag))
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Fold an enum-ish keyword ("Full Time", "full_time") to hyphenated
/// lowercase so it compares against the documented variants.
pub fn normalize_keyword(value: &str) -> String {
    nfkc_lower_trim(value)
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
