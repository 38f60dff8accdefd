use log::debug;
use thiserror::Error;

/// Vertical extent of a rendered region in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Option<Self> {
        if top.is_finite() && height.is_finite() && height >= 0.0 {
            Some(Self { top, height })
        } else {
            None
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: a point on the bottom edge belongs to whatever follows.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MeasureError {
    #[error("element `{0}` is not mounted")]
    Missing(String),
    #[error("element `{0}` has no layout yet")]
    Unsized(String),
}

/// Layout queries against whatever renders the page.
pub trait LayoutProbe {
    fn measure(&self, id: &str) -> Result<Bounds, MeasureError>;
}

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("section `{0}` is already registered")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub label: String,
    /// `None` until the section has been measured successfully.
    pub bounds: Option<Bounds>,
}

/// Page regions in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `(id, label)` pairs in order; later duplicates are rejected.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut registry = Self::new();
        for (id, label) in entries {
            registry.register(id, label)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, id: &str, label: &str) -> Result<(), RegistryError> {
        if self.position(id).is_some() {
            return Err(RegistryError::Duplicate(id.to_string()));
        }
        self.sections.push(Section {
            id: id.to_string(),
            label: label.to_string(),
            bounds: None,
        });
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    #[cfg(test)]
    pub fn set_bounds(&mut self, id: &str, bounds: Option<Bounds>) {
        if let Some(section) = self.sections.iter_mut().find(|section| section.id == id) {
            section.bounds = bounds;
        }
    }

    /// Re-measures every section. Failed measurements clear the stored
    /// bounds so stale layout is never used. Returns how many succeeded.
    pub fn refresh<P: LayoutProbe + ?Sized>(&mut self, probe: &P) -> usize {
        let mut measured = 0;
        for section in &mut self.sections {
            match probe.measure(&section.id) {
                Ok(bounds) => {
                    section.bounds = Some(bounds);
                    measured += 1;
                }
                Err(err) => {
                    if section.bounds.is_some() {
                        debug!("Dropping bounds: {}", err);
                    }
                    section.bounds = None;
                }
            }
        }
        measured
    }
}
