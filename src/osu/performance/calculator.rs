use crate::{osu::OsuPerformanceAttributes, BeatmapAttributes, GameMods, PlayStatistics};

pub const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.12;

pub(crate) struct OsuPerformanceCalculator<'a> {
    attrs: &'a BeatmapAttributes,
    mods: GameMods,
    state: &'a PlayStatistics,
    acc: f64,
    total_hits: f64,
}

impl<'a> OsuPerformanceCalculator<'a> {
    pub fn new(
        attrs: &'a BeatmapAttributes,
        mods: GameMods,
        state: &'a PlayStatistics,
        acc: f64,
    ) -> Self {
        Self {
            attrs,
            mods,
            state,
            acc,
            total_hits: f64::from(state.total_hits()),
        }
    }
}

impl OsuPerformanceCalculator<'_> {
    pub fn calculate(self) -> OsuPerformanceAttributes {
        let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

        // NF penalty
        if self.mods.nf() {
            multiplier *= (1.0 - 0.2 * f64::from(self.state.misses)).max(0.9);
        }

        // SO penalty
        if self.mods.so() && self.total_hits > 0.0 {
            multiplier *= 1.0 - (f64::from(self.attrs.n_spinners) / self.total_hits).powf(0.85);
        }

        let aim_value = self.compute_aim_value();
        let speed_value = self.compute_speed_value();
        let acc_value = self.compute_accuracy_value();

        let pp = (aim_value.powf(1.1) + speed_value.powf(1.1) + acc_value.powf(1.1))
            .powf(1.0 / 1.1)
            * multiplier;

        OsuPerformanceAttributes {
            difficulty: *self.attrs,
            pp,
            pp_acc: acc_value,
            pp_aim: aim_value,
            pp_speed: speed_value,
            accuracy: self.acc,
        }
    }

    fn compute_aim_value(&self) -> f64 {
        // TD penalty
        let raw_aim = if self.mods.td() {
            self.attrs.aim.powf(0.8)
        } else {
            self.attrs.aim
        };

        let mut aim_value = difficulty_to_performance(raw_aim);
        aim_value *= self.length_bonus();

        // Penalize misses
        if self.state.misses > 0 {
            let misses = f64::from(self.state.misses);

            aim_value *= 0.97 * (1.0 - (misses / self.total_hits).powf(0.775)).powf(misses);
        }

        aim_value *= self.combo_scaling();

        // AR bonus
        let ar = self.attrs.ar;
        let mut ar_factor = 0.0;

        if ar > 10.33 {
            ar_factor += 0.4 * (ar - 10.33);
        } else if ar < 8.0 {
            ar_factor += 0.01 * (8.0 - ar);
        }

        aim_value *= 1.0 + self.scale_by_length(ar_factor);

        // HD bonus
        if self.mods.hd() {
            aim_value *= 1.0 + 0.4 * (12.0 - ar);
        }

        // FL bonus
        if self.mods.fl() {
            let total_hits = self.total_hits;
            let mut fl_bonus = 1.0 + 0.35 * (total_hits / 200.0).min(1.0);

            if total_hits > 200.0 {
                fl_bonus += 0.3 * ((total_hits - 200.0) / 300.0).min(1.0);

                if total_hits > 500.0 {
                    fl_bonus += (total_hits - 500.0) / 1200.0;
                }
            }

            aim_value *= fl_bonus;
        }

        // Scale with accuracy
        aim_value *= 0.5 + self.acc / 2.0;
        aim_value *= 0.98 + self.attrs.od * self.attrs.od / 2500.0;

        aim_value
    }

    fn compute_speed_value(&self) -> f64 {
        let mut speed_value = difficulty_to_performance(self.attrs.speed);
        speed_value *= self.length_bonus();

        // Penalize misses
        if self.state.misses > 0 {
            let misses = f64::from(self.state.misses);

            speed_value *= 0.97
                * (1.0 - (misses / self.total_hits).powf(0.775)).powf(misses.powf(0.875));
        }

        speed_value *= self.combo_scaling();

        // AR bonus
        let ar = self.attrs.ar;

        if ar > 10.33 {
            speed_value *= 1.0 + self.scale_by_length(0.4 * (ar - 10.33));
        }

        // HD bonus
        if self.mods.hd() {
            speed_value *= 1.0 + 0.04 * (12.0 - ar);
        }

        // Scale the speed value with accuracy and OD
        let od = self.attrs.od;
        let acc_exp = (14.5 - od.max(8.0)) / 2.0;

        // Avoid `0^x = inf` for unreasonably high OD values
        let acc_factor = if self.acc > 0.0 {
            self.acc.powf(acc_exp)
        } else {
            0.0
        };

        speed_value *= (0.95 + od * od / 750.0) * acc_factor;

        // Penalize 50s
        let n50 = f64::from(self.state.n50);
        speed_value *= 0.98_f64.powf((n50 - self.total_hits / 500.0).max(0.0));

        speed_value
    }

    fn compute_accuracy_value(&self) -> f64 {
        let (better_acc_percentage, n_objects_with_acc) = if self.mods.v2() {
            (self.acc, self.total_hits)
        } else {
            let n_circles = f64::from(self.attrs.n_circles);

            let better_acc_percentage = if self.attrs.n_circles > 0 {
                let n300 = f64::from(self.state.n300);
                let n100 = f64::from(self.state.n100);
                let n50 = f64::from(self.state.n50);

                (((n300 - (self.total_hits - n_circles)) * 6.0 + n100 * 2.0 + n50)
                    / (n_circles * 6.0))
                    .max(0.0)
            } else {
                0.0
            };

            (better_acc_percentage, n_circles)
        };

        // Lots of arbitrary values from testing.
        // Considering to use derivation from perfect accuracy in a probabilistic manner - assume normal distribution
        let mut acc_value = 1.52163_f64.powf(self.attrs.od) * better_acc_percentage.powi(24) * 2.83;

        // Bonus for many hitcircles - it's harder to keep good accuracy up for longer
        acc_value *= (n_objects_with_acc / 1000.0).powf(0.3).min(1.15);

        // HD bonus
        if self.mods.hd() {
            acc_value *= 1.08;
        }

        // FL bonus
        if self.mods.fl() {
            acc_value *= 1.02;
        }

        acc_value
    }

    /// Longer maps are worth more
    fn length_bonus(&self) -> f64 {
        let total_hits = self.total_hits;
        let mut len_bonus = 0.95 + 0.4 * (total_hits / 2000.0).min(1.0);

        if total_hits > 2000.0 {
            len_bonus += 0.5 * (total_hits / 2000.0).log10();
        }

        len_bonus
    }

    /// Combo scaling relative to the map's maximum combo
    fn combo_scaling(&self) -> f64 {
        if self.attrs.max_combo == 0 {
            return 1.0;
        }

        let combo_ratio = f64::from(self.state.max_combo) / f64::from(self.attrs.max_combo);

        combo_ratio.powf(0.8).min(1.0)
    }

    /// Only apply the full factor after 1000 hits
    fn scale_by_length(&self, factor: f64) -> f64 {
        factor.min(factor * self.total_hits / 1000.0)
    }
}

fn difficulty_to_performance(difficulty: f64) -> f64 {
    (5.0 * (difficulty / 0.0675).max(1.0) - 4.0).powi(3) / 100_000.0
}
