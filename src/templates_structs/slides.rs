//! Per-slide body templates. Each `SlideBody` variant renders through one
//! of these into the HTML placed inside the slide frame.

use askama::Template;

use crate::presentation::Theme;
use crate::presentation::charts::PieChart;
use crate::presentation::slides::{Highlights, Particle, SlideBody};

/// Values every slide body may need besides the budget data.
pub struct SlideEnv<'a> {
    pub fiscal_year: &'a str,
    pub theme: Theme,
}

#[derive(Template)]
#[template(path = "slides/intro.html")]
pub struct IntroSlide<'a> {
    pub fiscal_year: &'a str,
    pub dark: bool,
}

#[derive(Template)]
#[template(path = "slides/definition.html")]
pub struct DefinitionSlide;

#[derive(Template)]
#[template(path = "slides/types.html")]
pub struct TypesSlide<'a> {
    pub fiscal_year: &'a str,
    pub fiscal_deficit: &'a str,
}

#[derive(Template)]
#[template(path = "slides/accounts.html")]
pub struct AccountsSlide<'a> {
    pub fiscal_year: &'a str,
}

#[derive(Template)]
#[template(path = "slides/rupee_chart.html")]
pub struct RupeeChartSlide<'a> {
    pub chart: Option<&'a PieChart>,
}

#[derive(Template)]
#[template(path = "slides/highlights.html")]
pub struct HighlightsSlide<'a> {
    pub highlights: Option<&'a Highlights>,
}

#[derive(Template)]
#[template(path = "slides/tax.html")]
pub struct TaxSlide<'a> {
    pub tax_slabs: &'a str,
}

#[derive(Template)]
#[template(path = "slides/vision.html")]
pub struct VisionSlide<'a> {
    pub viksit_bharat: &'a str,
    pub pillars: [&'static str; 4],
}

#[derive(Template)]
#[template(path = "slides/conclusion.html")]
pub struct ConclusionSlide<'a> {
    pub fiscal_year: &'a str,
}

pub struct Source {
    pub name: &'static str,
    pub location: &'static str,
    pub external: bool,
}

#[derive(Template)]
#[template(path = "slides/references.html")]
pub struct ReferencesSlide {
    pub sources: Vec<Source>,
}

#[derive(Template)]
#[template(path = "slides/credits.html")]
pub struct CreditsSlide<'a> {
    pub particles: &'a [Particle],
}

/// Render a slide body to HTML.
pub fn render_body(body: &SlideBody, env: &SlideEnv<'_>) -> Result<String, askama::Error> {
    match body {
        SlideBody::Intro => IntroSlide { fiscal_year: env.fiscal_year, dark: env.theme.is_dark() }.render(),
        SlideBody::Definition => DefinitionSlide.render(),
        SlideBody::BudgetTypes { fiscal_deficit } => TypesSlide {
            fiscal_year: env.fiscal_year,
            fiscal_deficit: fiscal_deficit.as_deref().unwrap_or(""),
        }
        .render(),
        SlideBody::Accounts => AccountsSlide { fiscal_year: env.fiscal_year }.render(),
        SlideBody::RupeeChart(chart) => RupeeChartSlide { chart: chart.as_ref() }.render(),
        SlideBody::Highlights(highlights) => HighlightsSlide { highlights: highlights.as_ref() }.render(),
        SlideBody::Tax { tax_slabs } => TaxSlide { tax_slabs: tax_slabs.as_deref().unwrap_or("") }.render(),
        SlideBody::Vision { viksit_bharat } => VisionSlide {
            viksit_bharat: viksit_bharat.as_deref().unwrap_or(""),
            pillars: ["Poor", "Youth", "Farmers", "Women"],
        }
        .render(),
        SlideBody::Conclusion => ConclusionSlide { fiscal_year: env.fiscal_year }.render(),
        SlideBody::References => ReferencesSlide {
            sources: vec![
                Source { name: "India Budget Portal", location: "indiabudget.gov.in", external: true },
                Source { name: "GSEB Economics Textbook", location: "Chapter 10: Budget", external: false },
                Source { name: "Ministry of Finance", location: "pib.gov.in", external: true },
            ],
        }
        .render(),
        SlideBody::Credits { particles } => CreditsSlide { particles }.render(),
    }
}
