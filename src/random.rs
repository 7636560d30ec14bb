use web_sys::js_sys;

/// A source of uniformly distributed numbers in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// `Math.random()` from the browser. Only usable on wasm32.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRandom;

impl UnitSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Maps a unit sample onto `[min, max)`.
pub fn between(source: &mut impl UnitSource, min: f64, max: f64) -> f64 {
    min + source.next_unit() * (max - min)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::UnitSource;

    /// Replays a fixed sequence of samples, cycling when exhausted.
    pub struct Sequence {
        values: Vec<f64>,
        next: usize,
    }

    impl Sequence {
        pub fn new(values: &[f64]) -> Self {
            Self { values: values.to_vec(), next: 0 }
        }
    }

    impl UnitSource for Sequence {
        fn next_unit(&mut self) -> f64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Sequence;
    use super::*;

    #[test]
    fn between_scales_onto_range() {
        let mut source = Sequence::new(&[0.0, 0.5, 0.999]);
        assert_eq!(between(&mut source, 7.0, 12.0), 7.0);
        assert_eq!(between(&mut source, 7.0, 12.0), 9.5);
        assert!(between(&mut source, 7.0, 12.0) < 12.0);
    }
}
