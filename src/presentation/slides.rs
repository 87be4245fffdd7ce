use rand::Rng;

use super::charts::{BarChart, PieChart};
use crate::models::budget::BudgetData;

/// Renderable content of one slide, produced from the current data.
#[derive(Debug, Clone)]
pub enum SlideBody {
    Intro,
    Definition,
    BudgetTypes { fiscal_deficit: Option<String> },
    Accounts,
    /// `None` until data has loaded.
    RupeeChart(Option<PieChart>),
    Highlights(Option<Highlights>),
    Tax { tax_slabs: Option<String> },
    Vision { viksit_bharat: Option<String> },
    Conclusion,
    References,
    Credits { particles: Vec<Particle> },
}

#[derive(Debug, Clone)]
pub struct Highlights {
    pub agriculture: String,
    pub education: String,
    pub infrastructure: String,
    pub chart: BarChart,
}

/// Decorative dot on the credits slide. Positions are percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration: f64,
    pub delay: f64,
}

type ContentFn = Box<dyn Fn(Option<&BudgetData>) -> SlideBody + Send + Sync>;

pub struct SlideDescriptor {
    pub id: &'static str,
    pub title: String,
    pub subtitle: &'static str,
    content: ContentFn,
}

impl SlideDescriptor {
    fn new(
        id: &'static str,
        title: impl Into<String>,
        subtitle: &'static str,
        content: impl Fn(Option<&BudgetData>) -> SlideBody + Send + Sync + 'static,
    ) -> Self {
        Self { id, title: title.into(), subtitle, content: Box::new(content) }
    }

    /// Evaluate the slide against the current data.
    pub fn content(&self, data: Option<&BudgetData>) -> SlideBody {
        (self.content)(data)
    }
}

impl std::fmt::Debug for SlideDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideDescriptor").field("id", &self.id).field("title", &self.title).finish()
    }
}

const PARTICLE_COUNT: usize = 20;

/// Immutable, ordered slide list. Order is both presentation and
/// navigation order.
#[derive(Debug)]
pub struct Deck {
    slides: Vec<SlideDescriptor>,
}

impl Deck {
    fn new(slides: Vec<SlideDescriptor>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideDescriptor> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides.iter()
    }

    #[cfg(test)]
    fn position(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// The budget explainer deck for one fiscal year.
    pub fn budget(fiscal_year: &str) -> Self {
        let particles = scatter_particles(&mut rand::rng(), PARTICLE_COUNT);

        Self::new(vec![
            SlideDescriptor::new(
                "intro",
                format!("Welcome to Your {fiscal_year} Budget Guide"),
                "Making sense of India's financial plan in simple terms",
                |_| SlideBody::Intro,
            ),
            SlideDescriptor::new(
                "definition",
                "1. What is a Budget?",
                "The Government's Annual Financial Plan",
                |_| SlideBody::Definition,
            ),
            SlideDescriptor::new(
                "types",
                "2. Types of Budgets",
                "Balanced, Surplus, or Deficit?",
                |data| SlideBody::BudgetTypes {
                    fiscal_deficit: data.map(|d| d.fiscal_deficit.clone()),
                },
            ),
            SlideDescriptor::new(
                "accounts",
                "3. Revenue vs. Capital",
                "Daily Expenses vs. Long-term Assets",
                |_| SlideBody::Accounts,
            ),
            SlideDescriptor::new(
                "rupee-comes",
                "4. Where does the money come from?",
                "Sources of Government Income",
                |data| {
                    SlideBody::RupeeChart(
                        data.map(|d| PieChart::new("Every ₹1 comes from...", &d.rupee_comes_from)),
                    )
                },
            ),
            SlideDescriptor::new(
                "rupee-goes",
                "5. Where does the money go?",
                "Government Spending Priorities",
                |data| {
                    SlideBody::RupeeChart(
                        data.map(|d| PieChart::new("Every ₹1 is spent on...", &d.rupee_goes_to)),
                    )
                },
            ),
            SlideDescriptor::new(
                "highlights",
                format!("6. Big Wins for {fiscal_year}"),
                "Where the major investments are going",
                |data| {
                    SlideBody::Highlights(data.map(|d| Highlights {
                        agriculture: d.agriculture.clone(),
                        education: d.education.clone(),
                        infrastructure: d.infrastructure.clone(),
                        chart: BarChart::sectors(d),
                    }))
                },
            ),
            SlideDescriptor::new(
                "tax",
                "7. Tax: What's in it for you?",
                "Simplifying the New Tax Regime",
                |data| SlideBody::Tax { tax_slabs: data.map(|d| d.tax_slabs.clone()) },
            ),
            SlideDescriptor::new(
                "vision",
                "8. The Big Goal: 2047",
                "Viksit Bharat — A Developed India",
                |data| SlideBody::Vision { viksit_bharat: data.map(|d| d.viksit_bharat.clone()) },
            ),
            SlideDescriptor::new(
                "conclusion",
                "9. Wrap Up",
                "A Plan for a Stronger Tomorrow",
                |_| SlideBody::Conclusion,
            ),
            SlideDescriptor::new(
                "references",
                "Sources & References",
                "Where we got our data",
                |_| SlideBody::References,
            ),
            SlideDescriptor::new("credits", "Thank You!", "Presentation Credits", move |_| {
                SlideBody::Credits { particles: particles.clone() }
            }),
        ])
    }
}

/// Lay out decorative particles once; the credits slide reuses the layout
/// on every render.
pub fn scatter_particles(rng: &mut impl Rng, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            scale: rng.random_range(0.0..2.0),
            duration: rng.random_range(5.0..10.0),
            delay: rng.random_range(0.0..5.0),
        })
        .collect()
}
