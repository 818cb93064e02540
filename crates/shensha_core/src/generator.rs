// 랜덤 차트 생성기
// 같은 시드 = 같은 차트 시퀀스 (ChaCha8)

use crate::chart::{Branch, Chart, Stem, StemBranchPair};
use crate::config::GeneratorConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct ChartGenerator {
    rng: ChaCha8Rng,
    sexagenary_only: bool,
}

impl ChartGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), sexagenary_only: true }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.seed).sexagenary_only(config.sexagenary_only)
    }

    /// false면 10×12 전체 조합에서 뽑는다
    pub fn sexagenary_only(mut self, enabled: bool) -> Self {
        self.sexagenary_only = enabled;
        self
    }

    fn next_pillar(&mut self) -> StemBranchPair {
        if self.sexagenary_only {
            StemBranchPair::from_sexagenary_index(self.rng.gen_range(0..60))
        } else {
            let stem = Stem::ALL[self.rng.gen_range(0..Stem::ALL.len())];
            let branch = Branch::ALL[self.rng.gen_range(0..Branch::ALL.len())];
            StemBranchPair::new(stem, branch)
        }
    }

    pub fn next_chart(&mut self) -> Chart {
        Chart::new(self.next_pillar(), self.next_pillar(), self.next_pillar(), self.next_pillar())
    }

    pub fn generate(&mut self, count: usize) -> Vec<Chart> {
        (0..count).map(|_| self.next_chart()).collect()
    }
}
