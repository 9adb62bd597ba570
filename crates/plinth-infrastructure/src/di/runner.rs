//! Registration Unit Runner and Startup Task Runner
//!
//! Both runners share one algorithm, parameterized by [`Capability`]:
//!
//! 1. discover implementors through the [`TypeScanner`]
//! 2. construct every unit; one failed constructor aborts the bootstrap
//! 3. stable sort by declared order, so ties keep discovery order
//! 4. invoke each unit synchronously; the first failure stops the sequence
//!
//! Both return the type names of the units they invoked, in invocation order.

use plinth_domain::error::{Error, Result};
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::di::composition::{CompositionBuilder, Resolver};
use crate::di::plugin::{Capability, Registrars, StartupTasks};
use crate::discovery::TypeScanner;

/// A constructed unit together with its sort key
struct Prepared<U: ?Sized> {
    type_name: &'static str,
    order: i32,
    unit: Box<U>,
}

/// Discover, construct and order every unit of a capability
fn prepare<C: Capability>(scanner: &TypeScanner) -> Result<Vec<Prepared<C::Unit>>> {
    let mut prepared = scanner
        .find_implementors::<C>()
        .into_iter()
        .map(|implementor| -> Result<Prepared<C::Unit>> {
            let unit = (implementor.create)()
                .map_err(|message| Error::instantiation(implementor.type_name, message))?;
            Ok(Prepared {
                type_name: implementor.type_name,
                order: C::order(&*unit),
                unit,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // sort_by_key is stable
    prepared.sort_by_key(|p| p.order);
    Ok(prepared)
}

/// Invoke prepared units in order, stopping at the first failure
fn invoke<U, F, W>(
    capability: &str,
    units: Vec<Prepared<U>>,
    mut run: F,
    wrap: W,
) -> Result<Vec<&'static str>>
where
    U: ?Sized,
    F: FnMut(&U) -> Result<()>,
    W: Fn(&'static str, Error) -> Error,
{
    let mut invoked = Vec::with_capacity(units.len());
    for prepared in units {
        debug!(
            capability,
            unit = prepared.type_name,
            order = prepared.order,
            "Invoking unit"
        );
        if let Err(e) = run(&*prepared.unit) {
            error!(
                capability,
                unit = prepared.type_name,
                error = %e,
                "Unit failed, aborting sequence"
            );
            return Err(wrap(prepared.type_name, e));
        }
        invoked.push(prepared.type_name);
    }
    Ok(invoked)
}

/// Run every discovered dependency registrar against the builder
///
/// Settings errors (invalid or unsupported provider configuration) surface
/// unchanged; any other registrar error is wrapped in
/// [`Error::Registration`].
pub fn run_registrars(
    builder: &mut CompositionBuilder,
    scanner: &TypeScanner,
    config: &AppConfig,
) -> Result<Vec<&'static str>> {
    let units = prepare::<Registrars>(scanner)?;
    info!(count = units.len(), "Running dependency registrars");
    invoke(
        Registrars::NAME,
        units,
        |registrar| registrar.register(builder, scanner, config),
        |unit, e| {
            if e.is_settings_error() {
                e
            } else {
                Error::registration(unit, e)
            }
        },
    )
}

/// Run every discovered startup task against the finalized resolver
///
/// Returns `None` without discovering anything when `skip` is set.
pub fn run_startup_tasks(
    resolver: &Resolver,
    scanner: &TypeScanner,
    skip: bool,
) -> Result<Option<Vec<&'static str>>> {
    if skip {
        info!("Startup tasks skipped by configuration");
        return Ok(None);
    }
    let units = prepare::<StartupTasks>(scanner)?;
    info!(count = units.len(), "Running startup tasks");
    invoke(
        StartupTasks::NAME,
        units,
        |task| task.execute(resolver),
        Error::startup_task,
    )
    .map(Some)
}
