use rand::Rng;

/// Fuente de aleatoriedad del generador. En producción envuelve un `rand::Rng`;
/// en los tests se sustituye por una secuencia fija.
pub trait RandomSource {
    /// Índice uniforme en `0..upper`. `upper` nunca es 0.
    fn index(&mut self, upper: usize) -> usize;

    /// `true` con probabilidad `p`.
    fn chance(&mut self, p: f64) -> bool;
}

pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }

    /// NaN cuenta como probabilidad 0.
    fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

/// Fisher–Yates sobre una copia.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut dyn RandomSource) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.index(i + 1);
        out.swap(i, j);
    }
    out
}

/// Hasta `n` elementos sin reemplazo (baraja y se queda con el prefijo).
pub fn sample<T: Clone>(items: &[T], n: usize, rng: &mut dyn RandomSource) -> Vec<T> {
    let mut out = shuffle(items, rng);
    out.truncate(n);
    out
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Nunca intercambia nada y nunca elige frase: el orden de entrada se conserva.
    pub struct Identity;

    impl RandomSource for Identity {
        fn index(&mut self, upper: usize) -> usize {
            upper - 1
        }

        fn chance(&mut self, _p: f64) -> bool {
            false
        }
    }

    /// Como `Identity`, pero siempre intenta la pregunta de frase.
    pub struct AlwaysPhrase;

    impl RandomSource for AlwaysPhrase {
        fn index(&mut self, upper: usize) -> usize {
            upper - 1
        }

        fn chance(&mut self, _p: f64) -> bool {
            true
        }
    }

    /// Devuelve índices de un guion, acotados a `upper`.
    pub struct Scripted {
        pub picks: Vec<usize>,
        pub pos: usize,
    }

    impl RandomSource for Scripted {
        fn index(&mut self, upper: usize) -> usize {
            let pick = self.picks.get(self.pos).copied().unwrap_or(upper - 1);
            self.pos += 1;
            pick.min(upper - 1)
        }

        fn chance(&mut self, _p: f64) -> bool {
            false
        }
    }
}
