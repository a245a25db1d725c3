use candle_core::Device;
use tracing::{debug, warn};

/// Returns the first accelerator that opens among compiled backends, else CPU.
///
/// Metal is tried before CUDA. Device failures are logged, never fatal.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => {
                tracing::info!("Sentence model on Metal");
                return device;
            }
            Err(e) => warn!(error = %e, "Metal device unavailable"),
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => {
                tracing::info!("Sentence model on CUDA");
                return device;
            }
            Err(e) => warn!(error = %e, "CUDA device unavailable"),
        }
    }

    if cfg!(any(feature = "metal", feature = "cuda")) {
        warn!("Falling back to CPU for sentence model");
    } else {
        debug!("No GPU backend compiled, sentence model on CPU");
    }
    Device::Cpu
}
