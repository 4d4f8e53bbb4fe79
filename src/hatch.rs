use std::f64::consts::FRAC_PI_2;

use log::trace;
use rand::Rng;

use crate::error::GeometryError;
use crate::polygon::Polygon;
use crate::segment::Segment;
use crate::vector::Vector;

/// Upper bound on scan lines either side of the anchor.
const MAX_STEPS: f64 = 1e6;

/// Jitter function that keeps every hatch line on its nominal offset.
pub fn no_jitter(_: f64) -> f64 {
    0.0
}

/// Maps `[0, 1]` linearly onto `[-1, 1]`.
pub fn uniform_jitter(x: f64) -> f64 {
    2.0 * x - 1.0
}

impl Polygon {
    /// Parallel chords through the interior, running at `angle` radians and spaced `spacing`
    /// apart, centred on the anchor.
    ///
    /// Every scan line is shifted by `jitter(random()) * spacing` across the grain, where
    /// `random` yields values in `[0, 1)` and `jitter` maps them onto `[-1, 1]`. The crossings
    /// of each scan line are paired up in order; an unpaired last crossing is discarded.
    ///
    /// Spacing that is not positive and finite, or so fine that more than a million scan lines
    /// would be needed on either side of the anchor, is rejected as
    /// [`GeometryError::InvalidSpacing`].
    pub fn hatch_fill<J, R>(&self, angle: f64, spacing: f64, mut jitter: J, mut random: R) -> Result<Vec<Segment>, GeometryError>
    where
        J: FnMut(f64) -> f64,
        R: FnMut() -> f64,
    {
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(GeometryError::InvalidSpacing(spacing));
        }

        let reach = self.max_anchor_distance();
        let steps = (reach / spacing).floor();
        if steps > MAX_STEPS {
            return Err(GeometryError::InvalidSpacing(spacing));
        }
        let steps = steps as i64;
        let grain = Vector::unit(angle);
        let across = grain.rotate(FRAC_PI_2);
        let overshoot = grain.scale(2.0 * reach);

        let mut hatches = Vec::new();
        for step in -steps..=steps {
            let control = self
                .anchor()
                .displace(across.scale(spacing * (step as f64 + jitter(random()))));
            let scan = Segment::new(control.displace(-overshoot), control.displace(overshoot));
            let crossings = self.intersect(&scan);
            hatches.extend(
                crossings
                    .chunks_exact(2)
                    .map(|pair| Segment::new(pair[0], pair[1])),
            );
        }
        trace!("{} scan lines produced {} hatches", 2 * steps + 1, hatches.len());
        Ok(hatches)
    }

    /// [`Polygon::hatch_fill`] drawing its random inputs from `rng`.
    pub fn hatch_fill_rng<J, G>(&self, angle: f64, spacing: f64, jitter: J, rng: &mut G) -> Result<Vec<Segment>, GeometryError>
    where
        J: FnMut(f64) -> f64,
        G: Rng + ?Sized,
    {
        self.hatch_fill(angle, spacing, jitter, || rng.gen::<f64>())
    }
}
