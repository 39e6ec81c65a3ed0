use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{bounded, Receiver};
use image::RgbaImage;

/// Result of the start-up asset pass, delivered once.
///
/// Arrival of this message IS the page's load signal: decode failure still
/// sends (with no poster) so the reveal gate can never wedge on a broken
/// asset.
pub(crate) struct AssetLoad {
    pub poster: Option<RgbaImage>,
}

/// Decodes the poster off the render thread and reports completion.
///
/// The channel holds the single completion message, so the loader thread
/// never blocks on the receiver and a receiver dropped before the decode
/// finishes simply discards it.
pub(crate) fn spawn_asset_loader(poster_path: Option<PathBuf>) -> Receiver<AssetLoad> {
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        let poster = poster_path.as_ref().and_then(|path| {
            match image::open(path) {
                Ok(decoded) => {
                    let rgba = decoded.to_rgba8();
                    tracing::info!(
                        path = %path.display(),
                        width = rgba.width(),
                        height = rgba.height(),
                        "poster decoded"
                    );
                    Some(rgba)
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to decode poster; panel keeps the placeholder"
                    );
                    None
                }
            }
        });
        let _ = tx.send(AssetLoad { poster });
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn loader_signals_even_without_a_poster() {
        let rx = spawn_asset_loader(None);
        let load = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("loader reports");
        assert!(load.poster.is_none());
    }

    #[test]
    fn loader_signals_on_a_missing_file() {
        let rx = spawn_asset_loader(Some(PathBuf::from("/definitely/not/here.png")));
        let load = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("loader reports despite the bad path");
        assert!(load.poster.is_none());
    }
}
