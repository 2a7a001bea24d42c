/// Display locale. Polish is the site's source locale; English is the fallback
/// translation shown alongside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Pl,
    En,
}

impl Locale {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let candidate = raw
            .unwrap_or("pl")
            .split(',')
            .next()
            .unwrap_or("pl")
            .split(['-', '_'])
            .next()
            .unwrap_or("pl")
            .trim()
            .to_lowercase();
        match candidate.as_str() {
            "en" => Locale::En,
            _ => Locale::Pl,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
        }
    }
}
