//! Directory feature extraction and JSON output.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::Path;

use image::ImageReader;
use imgprep_core::PrepError;

use crate::encoder::ImageEncoder;

/// Feature vectors keyed by filename stem.
pub type FeatureMap = BTreeMap<String, Vec<f32>>;

/// Runs every image in a directory through an [`ImageEncoder`].
pub struct FeatureExtractor<E> {
    encoder: E,
}

impl<E: ImageEncoder> FeatureExtractor<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    /// Extract the feature vector for one image file.
    pub fn extract_file(&mut self, path: &Path) -> Result<Vec<f32>, PrepError> {
        let data = fs::read(path)
            .map_err(|e| PrepError::Decode(format!("{}: {}", path.display(), e)))?;
        let img = ImageReader::new(Cursor::new(&data))
            .with_guessed_format()
            .map_err(|e| PrepError::Decode(format!("{}: {}", path.display(), e)))?
            .decode()
            .map_err(|e| PrepError::Decode(format!("{}: {}", path.display(), e)))?;
        self.encoder.encode(&img)
    }

    /// Extract features for every file directly inside `in_dir`.
    ///
    /// Keys are filename stems; two files sharing a stem keep only one entry.
    /// Any per-file failure aborts the whole extraction.
    pub fn extract_dir(&mut self, in_dir: &Path) -> Result<FeatureMap, PrepError> {
        if !in_dir.is_dir() {
            return Err(PrepError::Setup(format!(
                "input directory {} does not exist or is not a directory",
                in_dir.display()
            )));
        }

        let entries = fs::read_dir(in_dir)
            .map_err(|e| PrepError::Setup(format!("{}: {}", in_dir.display(), e)))?;

        let mut features = FeatureMap::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| PrepError::Setup(format!("{}: {}", in_dir.display(), e)))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let stem = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };

            tracing::info!(file = %path.display(), "Extracting features");
            let vector = self.extract_file(&path)?;
            features.insert(stem, vector);
        }

        tracing::info!(count = features.len(), "Extraction complete");
        Ok(features)
    }
}

/// Write the feature map as indented JSON: `{ "<stem>": [floats], ... }`.
pub fn save_features(features: &FeatureMap, path: &Path) -> Result<(), PrepError> {
    let file =
        File::create(path).map_err(|e| PrepError::Encode(format!("{}: {}", path.display(), e)))?;
    serde_json::to_writer_pretty(BufWriter::new(file), features)
        .map_err(|e| PrepError::Encode(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    /// Encoder stub returning a constant vector, so directory traversal can
    /// be tested without a model file.
    struct FixedEncoder {
        len: usize,
    }

    impl ImageEncoder for FixedEncoder {
        fn input_side(&self) -> u32 {
            224
        }

        fn feature_len(&self) -> usize {
            self.len
        }

        fn encode(&mut self, _img: &DynamicImage) -> Result<Vec<f32>, PrepError> {
            Ok(vec![0.5; self.len])
        }
    }

    fn write_test_png(dir: &Path, name: &str) {
        let img = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_extract_dir_keys_are_stems() {
        let dir = tempfile::tempdir().unwrap();
        write_test_png(dir.path(), "cat.png");
        write_test_png(dir.path(), "dog.png");

        let mut extractor = FeatureExtractor::new(FixedEncoder { len: 4 });
        let features = extractor.extract_dir(dir.path()).unwrap();

        assert_eq!(features.len(), 2);
        assert!(features.contains_key("cat"));
        assert!(features.contains_key("dog"));
        assert_eq!(features["cat"].len(), 4);
    }

    #[test]
    fn test_extract_dir_missing_dir() {
        let mut extractor = FeatureExtractor::new(FixedEncoder { len: 4 });
        let err = extractor
            .extract_dir(Path::new("/definitely/not/here"))
            .unwrap_err();
        assert_eq!(err.kind(), "setup");
    }

    #[test]
    fn test_extract_dir_undecodable_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.png"), b"not pixels").unwrap();

        let mut extractor = FeatureExtractor::new(FixedEncoder { len: 4 });
        let err = extractor.extract_dir(dir.path()).unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn test_save_features_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.json");

        let mut features = FeatureMap::new();
        features.insert("cat".to_string(), vec![1.0, 2.0]);
        features.insert("dog".to_string(), vec![3.0, 4.0]);
        save_features(&features, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        // Indented output, one value per line
        assert!(text.contains("\n  \"cat\""));

        let loaded: FeatureMap = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded, features);
    }

    #[test]
    fn test_save_features_bad_destination() {
        let features = FeatureMap::new();
        let err = save_features(&features, Path::new("/no/such/dir/features.json")).unwrap_err();
        assert_eq!(err.kind(), "encode");
    }
}
