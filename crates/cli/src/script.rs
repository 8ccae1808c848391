//! Scripted selection driver: replays command-line flags through a resolver
//! session, one choice per step, stopping where the script runs out.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use skyfit_core::{
    BlindId, Catalog, Choice, Orientation, ProductCategory, ProductId, Session, SizeCode, StepId,
};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Skylight,
    RoofWindow,
    SunTunnel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PitchArg {
    Pitched,
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MaterialArg {
    TiledCorrugated,
    WideMetal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OpeningArg {
    Fixed,
    Manual,
    Electric,
    Solar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TunnelTypeArg {
    Rigid,
    Flexible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SpacingArg {
    #[value(name = "600")]
    Mm600,
    #[value(name = "900")]
    Mm900,
    #[value(name = "1200")]
    Mm1200,
    Unspecified,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ScriptArgs {
    #[arg(long, value_enum, help = "Product category to configure")]
    pub category: Option<CategoryArg>,
    #[arg(long, value_enum, help = "Roof pitch")]
    pub pitch: Option<PitchArg>,
    #[arg(long, value_enum, help = "Roof material")]
    pub material: Option<MaterialArg>,
    #[arg(long, value_enum, help = "Opening mechanism")]
    pub opening: Option<OpeningArg>,
    #[arg(long, value_enum, help = "Sun tunnel type (tiled pitched roofs only)")]
    pub tunnel_type: Option<TunnelTypeArg>,
    #[arg(long, help = "Roof window model id (ggl or gpl)")]
    pub window_model: Option<String>,
    #[arg(long, value_enum, help = "Truss/rafter spacing")]
    pub spacing: Option<SpacingArg>,
    #[arg(long, help = "Mount in landscape orientation (flat roofs)")]
    pub landscape: bool,
    #[arg(long, help = "Size code, e.g. C04 or 2222")]
    pub size: Option<String>,
    #[arg(long, help = "Product id to select on the results step")]
    pub product: Option<String>,
    #[arg(long, help = "Blind id, or 'none' to proceed without blinds")]
    pub blind: Option<String>,
    #[arg(long, help = "Add the insect screen (roof windows only)")]
    pub insect_screen: bool,
    #[arg(long, help = "Add the tunnel extension (rigid/universal tunnels)")]
    pub extension: bool,
}

/// Replays the script one choice at a time. Stops at the first step the
/// script leaves unanswered, at a dead-end, or at the summary.
pub fn drive(catalog: &Catalog, script: &ScriptArgs) -> Result<Session> {
    let mut session = Session::new();

    // Generous backstop; toggles are guarded below so the loop always makes
    // forward progress.
    for _ in 0..64 {
        if session.step() == StepId::Summary || session.is_dead_end(catalog) {
            return Ok(session);
        }
        let Some(choice) = next_choice(catalog, &session, script) else {
            return Ok(session);
        };
        debug!(step = ?session.step(), choice = ?choice, "applying scripted choice");
        session
            .apply(catalog, &choice)
            .with_context(|| format!("script rejected at step {:?}", session.step()))?;
    }
    bail!("script did not settle after 64 transitions");
}

fn next_choice(catalog: &Catalog, session: &Session, script: &ScriptArgs) -> Option<Choice> {
    let state = session.state();
    match session.step() {
        StepId::ProductType => script.category.map(|category| {
            Choice::Category(match category {
                CategoryArg::Skylight => ProductCategory::Skylight,
                CategoryArg::RoofWindow => ProductCategory::RoofWindow,
                CategoryArg::SunTunnel => ProductCategory::SunTunnel,
            })
        }),
        StepId::Pitch => script.pitch.map(|pitch| {
            Choice::Pitch(match pitch {
                PitchArg::Pitched => skyfit_core::RoofPitch::Pitched,
                PitchArg::Flat => skyfit_core::RoofPitch::Flat,
            })
        }),
        StepId::Material => script.material.map(|material| {
            Choice::Material(match material {
                MaterialArg::TiledCorrugated => skyfit_core::RoofMaterial::TiledCorrugated,
                MaterialArg::WideMetal => skyfit_core::RoofMaterial::WideMetal,
            })
        }),
        StepId::Opening => script.opening.map(|opening| {
            Choice::Opening(match opening {
                OpeningArg::Fixed => skyfit_core::OpeningType::Fixed,
                OpeningArg::Manual => skyfit_core::OpeningType::Manual,
                OpeningArg::Electric => skyfit_core::OpeningType::Electric,
                OpeningArg::Solar => skyfit_core::OpeningType::Solar,
            })
        }),
        StepId::SunTunnelType => script.tunnel_type.map(|kind| {
            Choice::TunnelType(match kind {
                TunnelTypeArg::Rigid => skyfit_core::TunnelKind::Rigid,
                TunnelTypeArg::Flexible => skyfit_core::TunnelKind::Flexible,
            })
        }),
        StepId::RoofWindowModel => script
            .window_model
            .as_ref()
            .map(|id| Choice::WindowModel(ProductId::new(id.clone()))),
        StepId::Truss => script.spacing.map(|spacing| {
            Choice::Spacing(match spacing {
                SpacingArg::Mm600 => skyfit_core::StructuralSpacing::Mm600,
                SpacingArg::Mm900 => skyfit_core::StructuralSpacing::Mm900,
                SpacingArg::Mm1200 => skyfit_core::StructuralSpacing::Mm1200,
                SpacingArg::Unspecified => skyfit_core::StructuralSpacing::Unspecified,
            })
        }),
        StepId::Size => {
            if script.landscape && state.orientation == Orientation::Portrait {
                return Some(Choice::Orientation(Orientation::Landscape));
            }
            script.size.as_ref().map(|code| Choice::Size(SizeCode::new(code.clone())))
        }
        StepId::Results => results_choice(catalog, session, script),
        StepId::Blinds => blinds_choice(session, script),
        StepId::Addon => {
            if script.extension && state.selected_addon.is_none() {
                let extension = state
                    .selected_product
                    .as_ref()
                    .and_then(|id| catalog.product(id))
                    .and_then(|product| catalog.tunnel_extension_for(&product.model));
                if let Some(extension) = extension {
                    return Some(Choice::Addon(Some(extension.id.clone())));
                }
            }
            Some(Choice::Continue)
        }
        StepId::Summary => None,
    }
}

fn results_choice(catalog: &Catalog, session: &Session, script: &ScriptArgs) -> Option<Choice> {
    let state = session.state();
    if let Some(product) = &script.product {
        let id = ProductId::new(product.clone());
        return match (&state.size_code, &script.size) {
            (Some(_), _) => Some(Choice::Product(id)),
            (None, Some(code)) => Some(Choice::ProductAtSize(id, SizeCode::new(code.clone()))),
            (None, None) => None,
        };
    }
    // Unambiguous results need no flag: auto-confirm a single candidate.
    match session.options(catalog).as_slice() {
        [only] => Some(only.choice.clone()),
        _ => None,
    }
}

fn blinds_choice(session: &Session, script: &ScriptArgs) -> Option<Choice> {
    let state = session.state();
    let wanted = match script.blind.as_deref() {
        Some("none") | None => None,
        Some(id) => Some(BlindId::new(id)),
    };
    if state.category != Some(ProductCategory::RoofWindow) {
        // A skylight blind pick, "none" included, advances to the summary.
        return Some(Choice::Blind(wanted));
    }
    if state.selected_blind != wanted {
        return Some(Choice::Blind(wanted));
    }
    if script.insect_screen && !state.insect_screen {
        return Some(Choice::InsectScreen(true));
    }
    Some(Choice::Continue)
}
