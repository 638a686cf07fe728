use rustc_hash::FxHashMap;

#[derive(Debug)]
pub struct Settings {
    inner: FxHashMap<Setting, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    pub fn enable(&mut self, setting: Setting) {
        self.inner.insert(setting, true);
    }

    pub fn disable(&mut self, setting: Setting) {
        self.inner.insert(setting, false);
    }

    pub fn is_enabled(&self, setting: &Setting) -> bool {
        match self.inner.get(setting) {
            Some(v) => *v,
            _ => false,
        }
    }

    pub fn as_vec(&self) -> Vec<(Setting, bool)> {
        let mut settings = self
            .inner
            .iter()
            .map(|p| (p.0.clone(), *p.1))
            .collect::<Vec<_>>();
        settings.sort_by_key(|(setting, _)| setting.to_string());
        settings
    }
}

impl Default for Settings {
    fn default() -> Settings {
        let mut settings = Settings::new();

        settings.enable(Setting::Desugar);
        settings.disable(Setting::Debug);

        settings
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Setting {
    // rewrite dictionary literals before evaluation
    Desugar,
    // log the program that is handed to the interpreter
    Debug,
}

impl std::str::FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desugar" => Ok(Setting::Desugar),
            "debug" => Ok(Setting::Debug),
            other => Err(format!("unknown setting `{}`", other)),
        }
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let name = match self {
            Setting::Desugar => "desugar",
            Setting::Debug => "debug",
        };

        fmt.write_str(name)
    }
}
