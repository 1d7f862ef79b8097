//! Single-threaded backend.

use crate::architecture::Architecture;
use crate::executor::{check_len, Executor, Kernel};
use fathom_core::{Extent, Index};

/// Executes kernels as `k`/`j`/`i` nested loops on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Serial;

impl Executor for Serial {
    fn architecture(&self) -> Architecture {
        Architecture::Serial
    }

    fn launch(&self, extent: Extent, dest: &mut [f64], kernel: &Kernel<'_>) {
        check_len(extent, dest);
        let mut n = 0;
        for k in 1..=extent.nz {
            for j in 1..=extent.ny {
                for i in 1..=extent.nx {
                    dest[n] = kernel(Index { i, j, k }, dest[n]);
                    n += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_every_index_once_in_storage_order() {
        let extent = Extent::new(3, 4, 2);
        let mut dest = vec![0.0; extent.len()];
        Serial.launch(extent, &mut dest, &|ix, _| extent.offset(ix) as f64);
        for (n, v) in dest.iter().enumerate() {
            assert_eq!(*v, n as f64);
        }
    }

    #[test]
    fn kernel_sees_current_value() {
        let extent = Extent::new(2, 2, 2);
        let mut dest = vec![1.5; extent.len()];
        Serial.launch(extent, &mut dest, &|_, old| old * 2.0);
        assert!(dest.iter().all(|&v| v == 3.0));
    }

    #[test]
    #[should_panic(expected = "destination holds")]
    fn wrong_length_panics() {
        let mut dest = vec![0.0; 3];
        Serial.launch(Extent::new(2, 2, 1), &mut dest, &|_, v| v);
    }
}
