use crate::Probability;
use crate::cards::canonical::Canonical;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;

/// Royal hold'em preflop equity of every canonical hole hand against a
/// uniformly random opponent hand, indexed by [`Canonical::index`].
///
/// Produced offline by the `preflop` binary with the Monte Carlo estimator
/// at `PREFLOP_TOLERANCE` and `PREFLOP_MIN_TRIALS`, royal rule included.
/// Rows are the low rank for suited keys and the high rank otherwise.
#[rustfmt::skip]
pub const PREFLOP: [Probability; crate::PREFLOP_KEYS] = [
    0.4875, 0.3730, 0.3828, 0.3928, 0.3891, 0.3917, 0.4108, 0.4303, 0.4531, 0.4693, 0.4966, 0.5261, 0.5707,
    0.3337, 0.5210, 0.4018, 0.4127, 0.4090, 0.4121, 0.4173, 0.4399, 0.4621, 0.4780, 0.5053, 0.5351, 0.5802,
    0.3436, 0.3645, 0.5552, 0.4310, 0.4284, 0.4310, 0.4369, 0.4455, 0.4709, 0.4868, 0.5146, 0.5444, 0.5892,
    0.3553, 0.3766, 0.3965, 0.5891, 0.4473, 0.4507, 0.4563, 0.4655, 0.4783, 0.4967, 0.5240, 0.5533, 0.5981,
    0.3499, 0.3723, 0.3926, 0.4141, 0.6179, 0.4676, 0.4738, 0.4827, 0.4952, 0.5024, 0.5320, 0.5615, 0.5964,
    0.3529, 0.3751, 0.3964, 0.4168, 0.4353, 0.6480, 0.4903, 0.4994, 0.5121, 0.5194, 0.5379, 0.5700, 0.6079,
    0.3735, 0.3809, 0.4023, 0.4232, 0.4415, 0.4601, 0.6773, 0.5152, 0.5283, 0.5359, 0.5547, 0.5771, 0.6162,
    0.3946, 0.4050, 0.4117, 0.4332, 0.4513, 0.4694, 0.4872, 0.7073, 0.5441, 0.5521, 0.5709, 0.5935, 0.6242,
    0.4192, 0.4290, 0.4392, 0.4470, 0.4658, 0.4836, 0.5016, 0.5183, 0.7391, 0.5716, 0.5896, 0.6120, 0.6420,
    0.4361, 0.4469, 0.4567, 0.4667, 0.4732, 0.4920, 0.5092, 0.5269, 0.5488, 0.7654, 0.5924, 0.6150, 0.6461,
    0.4655, 0.4751, 0.4851, 0.4960, 0.5048, 0.5113, 0.5296, 0.5475, 0.5679, 0.5707, 0.7896, 0.6234, 0.6537,
    0.4971, 0.5068, 0.5167, 0.5275, 0.5362, 0.5457, 0.5530, 0.5709, 0.5910, 0.5954, 0.6033, 0.8131, 0.6615,
    0.5443, 0.5543, 0.5637, 0.5741, 0.5729, 0.5847, 0.5943, 0.6024, 0.6230, 0.6275, 0.6355, 0.6445, 0.8370,
];

/// Lookup table for equity before any board card is dealt.
///
/// Borrows the embedded [`PREFLOP`] table by default. A table regenerated
/// or loaded from disk is owned instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Preflop(Cow<'static, [Probability; crate::PREFLOP_KEYS]>);

impl Default for Preflop {
    fn default() -> Self {
        Self(Cow::Borrowed(&PREFLOP))
    }
}

impl From<[Probability; crate::PREFLOP_KEYS]> for Preflop {
    fn from(table: [Probability; crate::PREFLOP_KEYS]) -> Self {
        Self(Cow::Owned(table))
    }
}

impl Preflop {
    pub fn get(&self, key: Canonical) -> Probability {
        self.0[key.index()]
    }
    pub fn table(&self) -> &[Probability; crate::PREFLOP_KEYS] {
        &self.0
    }

    /// Recompute every key with the Monte Carlo estimator.
    ///
    /// Each key gets its own generator seeded from `seed` and its index, so
    /// the result does not depend on how rayon schedules the work.
    #[cfg(feature = "server")]
    pub fn regenerate(
        seed: u64,
        montecarlo: &crate::equity::montecarlo::MonteCarlo,
        duration: std::time::Duration,
    ) -> anyhow::Result<Self> {
        use crate::cards::hand::Hand;
        use crate::equity::pool::Pool;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        use rayon::prelude::*;
        let table = Canonical::all()
            .collect::<Vec<Canonical>>()
            .into_par_iter()
            .map(|key| -> anyhow::Result<Probability> {
                let hole = key.hole();
                let ref mut rng = SmallRng::seed_from_u64(Self::seed(seed, key.index()));
                let pool = Pool::except(Hand::from(hole));
                let estimate = montecarlo.estimate(rng, hole, &pool, Hand::empty(), None, duration)?;
                log::debug!("{:<4} {}", key, estimate);
                Ok(estimate.probability)
            })
            .collect::<anyhow::Result<Vec<Probability>>>()?;
        Self::try_from(table)
    }

    #[cfg(feature = "server")]
    fn seed(seed: u64, index: usize) -> u64 {
        seed.wrapping_mul(crate::PREFLOP_KEYS as u64)
            .wrapping_add(index as u64)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        let file = serde_json::from_reader::<_, PreflopFile>(std::io::BufReader::new(file))
            .with_context(|| format!("parse {}", path.display()))?;
        Self::try_from(file)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        use anyhow::Context;
        let path = path.as_ref();
        let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &PreflopFile::from(self))
            .with_context(|| format!("write {}", path.display()))?;
        log::info!("saved preflop table to {}", path.display());
        Ok(())
    }
}

impl TryFrom<Vec<Probability>> for Preflop {
    type Error = anyhow::Error;
    fn try_from(table: Vec<Probability>) -> Result<Self, Self::Error> {
        let n = table.len();
        let table = <[Probability; crate::PREFLOP_KEYS]>::try_from(table)
            .map_err(|_| anyhow::anyhow!("preflop table has {} entries, expected {}", n, crate::PREFLOP_KEYS))?;
        anyhow::ensure!(
            table.iter().all(|p| (0.0..=1.0).contains(p)),
            "preflop table holds a value outside [0, 1]"
        );
        Ok(Self::from(table))
    }
}

/// On-disk form of a regenerated table.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreflopFile {
    pub version: u32,
    pub table: Vec<Probability>,
}

impl From<&Preflop> for PreflopFile {
    fn from(preflop: &Preflop) -> Self {
        Self {
            version: crate::PREFLOP_VERSION,
            table: preflop.table().to_vec(),
        }
    }
}

impl TryFrom<PreflopFile> for Preflop {
    type Error = anyhow::Error;
    fn try_from(file: PreflopFile) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            file.version == crate::PREFLOP_VERSION,
            "preflop table version {} does not match {}",
            file.version,
            crate::PREFLOP_VERSION
        );
        Self::try_from(file.table)
    }
}
