//! The lunar-phase disc: two offset circles whose overlap renders the
//! current phase, tilted by the subject's latitude.
//!
//! The foreground circle's center and radius are a piecewise function of
//! the Sun–Moon separation over four 90° brackets. Near the bracket
//! edges the radius grows quadratically, which pushes the foreground
//! circle clear of the disc and leaves a clean half-disc. A separation
//! outside `[0, 360)` fails every bracket; that is an upstream data
//! contract breach and aborts the build.

use glam::{DVec2, dvec2};

use crate::errors::ChartError;
use crate::project::rotate_about;
use crate::types::Subject;

use super::context::BuildContext;
use super::types::{LunarShade, StyleClass};

/// Disc geometry in local coordinates.
const DISC_CX: f64 = 20.0;
const DISC_CY: f64 = 10.0;
const DISC_R: f64 = 10.0;

/// Foreground circle of one bracket: center offset, radius, and which
/// shade paints foreground vs background.
struct Phase {
    cx: f64,
    r: f64,
    foreground: LunarShade,
    background: LunarShade,
}

fn phase_geometry(deg: f64) -> Result<Phase, ChartError> {
    let bracket = |value: f64| ChartError::UnreachableBracket {
        context: "lunar phase separation",
        value,
    };
    if deg < 0.0 {
        return Err(bracket(deg));
    }
    let phase = if deg < 90.0 {
        let mut maxr = deg;
        if deg > 80.0 {
            maxr *= maxr;
        }
        Phase {
            cx: 20.0 + (deg / 90.0) * (maxr + 10.0),
            r: 10.0 + (deg / 90.0) * maxr,
            foreground: LunarShade::Shadow,
            background: LunarShade::Lit,
        }
    } else if deg < 180.0 {
        let mut maxr = 180.0 - deg;
        if deg < 100.0 {
            maxr *= maxr;
        }
        Phase {
            cx: 20.0 + ((deg - 90.0) / 90.0 * (maxr + 10.0)) - (maxr + 10.0),
            r: 10.0 + maxr - ((deg - 90.0) / 90.0 * maxr),
            foreground: LunarShade::Lit,
            background: LunarShade::Shadow,
        }
    } else if deg < 270.0 {
        let mut maxr = deg - 180.0;
        if deg > 260.0 {
            maxr *= maxr;
        }
        Phase {
            cx: 20.0 + ((deg - 180.0) / 90.0 * (maxr + 10.0)),
            r: 10.0 + ((deg - 180.0) / 90.0 * maxr),
            foreground: LunarShade::Lit,
            background: LunarShade::Shadow,
        }
    } else if deg < 360.0 {
        let mut maxr = 360.0 - deg;
        if deg < 280.0 {
            maxr *= maxr;
        }
        Phase {
            cx: 20.0 + ((deg - 270.0) / 90.0 * (maxr + 10.0)) - (maxr + 10.0),
            r: 10.0 + maxr - ((deg - 270.0) / 90.0 * maxr),
            foreground: LunarShade::Shadow,
            background: LunarShade::Lit,
        }
    } else {
        return Err(bracket(deg));
    };
    Ok(phase)
}

/// Emit the lunar disc for the primary subject.
pub fn disc(cx: &mut BuildContext<'_>, subject: &Subject) -> Result<(), ChartError> {
    let phase = phase_geometry(subject.sun_moon_separation)?;

    let origin = dvec2(cx.width() * 0.18, cx.height() * 0.2);
    let tilt = -90.0 - subject.latitude;
    let place = |local: DVec2| origin + rotate_about(local, DVec2::ZERO, tilt);

    let disc_center = place(dvec2(DISC_CX, DISC_CY));
    cx.circle(
        disc_center,
        DISC_R,
        StyleClass::LunarBackground(phase.background),
    );
    cx.circle(
        place(dvec2(phase.cx, DISC_CY)),
        phase.r,
        StyleClass::LunarForeground(phase.foreground),
    );
    cx.circle(disc_center, DISC_R, StyleClass::LunarOutline);
    Ok(())
}
