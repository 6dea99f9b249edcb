//! Text rendering of the model tree for debugging
//!
//! The model is printed depth first, one definition per line, with nested
//! definitions indented below their parent:
//!
//! ```text
//! Default run:
//!   sim1
//! Dimensions:
//!   voltage
//! Units:
//!   mV
//! Global context:
//!   Component types:
//!     neuron (extends baseCell)
//!       Behavior profiles:
//!           *
//!             Default regime:
//!               State variables:
//!                 v: voltage
//! ```
//!
//! The format is meant for people. It is not parsed back and may change
//! between versions.

use std::{fmt, io};

use crate::{
    behavior::{Behavior, Regime},
    component::ComponentBase,
    context::Context,
    model::Model,
};

/// One level of indentation.
const TAB: &str = "  ";

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    unnamed_behavior_marker: &'static str,
}

impl Config {
    /// Creates the configuration used by `Display for Model`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unnamed_behavior_marker: "*",
        }
    }

    /// Uses `marker` in place of the name of unnamed behavior profiles.
    #[must_use]
    pub const fn with_unnamed_behavior_marker(mut self, marker: &'static str) -> Self {
        self.unnamed_behavior_marker = marker;
        self
    }

    /// Returns the marker printed for unnamed behavior profiles.
    #[must_use]
    pub const fn unnamed_behavior_marker(&self) -> &'static str {
        self.unnamed_behavior_marker
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the model to an I/O writer.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn print(model: &Model, writer: &mut impl io::Write) -> io::Result<()> {
    write!(writer, "{model}")
}

/// Renders the model into `out`.
///
/// # Errors
///
/// Returns an error only if `out` fails to accept the text.
pub fn render(model: &Model, out: &mut impl fmt::Write, config: &Config) -> fmt::Result {
    writeln!(out, "Default run:")?;
    for run in model.default_run() {
        writeln!(out, "{TAB}{run}")?;
    }

    writeln!(out, "Dimensions:")?;
    if let Some(dimensions) = model.dimensions() {
        for name in dimensions.keys() {
            writeln!(out, "{TAB}{name}")?;
        }
    }

    writeln!(out, "Units:")?;
    if let Some(units) = model.units() {
        for symbol in units.keys() {
            writeln!(out, "{TAB}{symbol}")?;
        }
    }

    if let Some(context) = model.context() {
        writeln!(out, "Global context:")?;
        render_context(context, "", out, config)?;
    }

    Ok(())
}

/// Renders a context whose section headers sit one level below `prefix`.
fn render_context(
    context: &Context,
    prefix: &str,
    out: &mut impl fmt::Write,
    config: &Config,
) -> fmt::Result {
    let prefix = format!("{prefix}{TAB}");
    let entry_prefix = format!("{prefix}{TAB}");

    if !context.component_types().is_empty() {
        writeln!(out, "{prefix}Component types:")?;
        for component_type in context.component_types().values() {
            write!(out, "{entry_prefix}{}", component_type.name())?;
            if let Some(parent) = component_type.extends() {
                write!(out, " (extends {parent})")?;
            }
            writeln!(out)?;
            render_context(component_type.context(), &entry_prefix, out, config)?;
        }
    }

    if !context.components().is_empty() {
        writeln!(out, "{prefix}Components:")?;
        for component in context.components().values() {
            write!(out, "{entry_prefix}{}", component.id())?;
            match component.base() {
                ComponentBase::OfType(component_type) => writeln!(out, ": {component_type}")?,
                ComponentBase::Extends(parent) => writeln!(out, " (extends {parent})")?,
            }
            render_context(component.context(), &entry_prefix, out, config)?;
        }
    }

    if !context.exposures().is_empty() {
        writeln!(out, "{prefix}Exposures:")?;
        for name in context.exposures() {
            writeln!(out, "{entry_prefix}{name}")?;
        }
    }

    if !context.behavior_profiles().is_empty() {
        writeln!(out, "{prefix}Behavior profiles:")?;
        let behavior_prefix = format!("{entry_prefix}{TAB}");
        for behavior in context.behavior_profiles().values() {
            render_behavior(behavior, &behavior_prefix, out, config)?;
        }
    }

    Ok(())
}

fn render_behavior(
    behavior: &Behavior,
    prefix: &str,
    out: &mut impl fmt::Write,
    config: &Config,
) -> fmt::Result {
    let name = if behavior.is_unnamed() {
        config.unnamed_behavior_marker()
    } else {
        behavior.name()
    };
    writeln!(out, "{prefix}{name}")?;

    if let Some(regime) = behavior.default_regime() {
        writeln!(out, "{prefix}{TAB}Default regime:")?;
        render_regime(regime, &format!("{prefix}{TAB}"), out)?;
    }

    Ok(())
}

fn render_regime(regime: &Regime, prefix: &str, out: &mut impl fmt::Write) -> fmt::Result {
    if !regime.state_variables().is_empty() {
        writeln!(out, "{prefix}{TAB}State variables:")?;
        for state_variable in regime.state_variables().values() {
            write!(out, "{prefix}{TAB}{TAB}{}", state_variable.name())?;
            if let Some(exposure) = state_variable.exposure() {
                write!(out, " (exposed as {exposure})")?;
            }
            writeln!(out, ": {}", state_variable.dimension())?;
        }
    }

    if !regime.time_derivatives().is_empty() {
        writeln!(out, "{prefix}{TAB}Time derivatives:")?;
        for time_derivative in regime.time_derivatives().values() {
            writeln!(
                out,
                "{prefix}{TAB}{TAB}{} = {} | {}",
                time_derivative.variable(),
                time_derivative.value(),
                time_derivative.expression_tree()
            )?;
        }
    }

    Ok(())
}
