use lazy_static::lazy_static;
use regex::Regex;

pub(crate) struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    /// Rewrite `word` if the rule matches, keeping the casing of anything captured.
    pub(crate) fn apply(&self, word: &str) -> Option<String> {
        if self.pattern.is_match(word) {
            Some(self.pattern.replace(word, self.replacement).into_owned())
        } else {
            None
        }
    }
}

fn compile(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|&(pattern, replacement)| Rule {
            pattern: Regex::new(&format!("(?i){}", pattern)).unwrap(),
            replacement,
        })
        .collect()
}

// Tables are ordered from most to least specific; the first match wins.
lazy_static! {
    pub(crate) static ref PLURALS: Vec<Rule> = compile(&[
        ("(quiz)$", "${1}zes"),
        ("^(oxen)$", "${1}"),
        ("^(ox)$", "${1}en"),
        ("^(m|l)ouse$", "${1}ice"),
        ("(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        ("(x|ch|ss|sh)$", "${1}es"),
        ("([^aeiouy]|qu)y$", "${1}ies"),
        ("(hive)$", "${1}s"),
        ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
        ("sis$", "ses"),
        ("([ti])a$", "${1}a"),
        ("([ti])um$", "${1}a"),
        ("(buffal|tomat)o$", "${1}oes"),
        ("(bu)s$", "${1}ses"),
        ("(alias|status)$", "${1}es"),
        ("(octop|vir)i$", "${1}i"),
        ("(octop|vir)us$", "${1}i"),
        ("(ax|test)is$", "${1}es"),
        ("s$", "s"),
        ("$", "s"),
    ]);

    pub(crate) static ref SINGULARS: Vec<Rule> = compile(&[
        ("(database)s$", "${1}"),
        ("(quiz)zes$", "${1}"),
        ("(matr)ices$", "${1}ix"),
        ("(vert|ind)ices$", "${1}ex"),
        ("^(ox)en", "${1}"),
        ("(alias|status)(es)?$", "${1}"),
        ("(octop|vir)(us|i)$", "${1}us"),
        ("^(a)x[ie]s$", "${1}xis"),
        ("(cris|test)(is|es)$", "${1}is"),
        ("(shoe)s$", "${1}"),
        ("(o)es$", "${1}"),
        ("(bus)(es)?$", "${1}"),
        ("^(m|l)ice$", "${1}ouse"),
        ("(x|ch|ss|sh)es$", "${1}"),
        ("(m)ovies$", "${1}ovie"),
        ("(s)eries$", "${1}eries"),
        ("([^aeiouy]|qu)ies$", "${1}y"),
        ("([lr])ves$", "${1}f"),
        ("(tive)s$", "${1}"),
        ("(hive)s$", "${1}"),
        ("([^f])ves$", "${1}fe"),
        ("(^analy)(sis|ses)$", "${1}sis"),
        ("((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$", "${1}sis"),
        ("([ti])a$", "${1}um"),
        ("(n)ews$", "${1}ews"),
        ("(ss)$", "${1}"),
        ("s$", ""),
    ]);
}

/// Singular and plural pairs that no suffix rule covers.
pub(crate) const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

pub(crate) const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];
