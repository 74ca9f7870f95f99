//! Tests for error display, sources and classification

#[cfg(test)]
mod tests {
    use floortiles::TilingError;
    use floortiles::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_display_messages() {
        let dims = TilingError::InvalidDimensions {
            rows: 0,
            cols: 3,
            reason: "rows must be positive".to_string(),
        };
        assert_eq!(
            dims.to_string(),
            "Invalid grid dimensions 0x3: rows must be positive"
        );

        let length = TilingError::InvalidTileLength {
            index: 2,
            length: 3,
        };
        assert_eq!(length.to_string(), "Tile 2 has 3 bars (expected 4)");

        let param = invalid_parameter("cell_pixels", &2, &"too small");
        assert_eq!(
            param.to_string(),
            "Invalid parameter 'cell_pixels' = '2': too small"
        );
    }

    // Tests wrapped errors stay reachable through the source chain
    #[test]
    fn test_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = TilingError::FileSystem {
            path: PathBuf::from("pool.txt"),
            operation: "read pool file",
            source: io,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("pool.txt"));
        assert!(TilingError::EmptyPool.source().is_none());
    }

    // Tests only bad inputs count as configuration errors
    // Verified by classifying every variant as configuration
    #[test]
    fn test_configuration_classification() {
        assert!(TilingError::EmptyPool.is_configuration_error());
        assert!(
            TilingError::InvalidTileLength {
                index: 0,
                length: 5
            }
            .is_configuration_error()
        );
        assert!(invalid_parameter("timeout", &0, &"must be positive").is_configuration_error());
        assert!(
            !TilingError::UnknownColor {
                color: 7,
                palette_size: 6
            }
            .is_configuration_error()
        );
        assert!(
            !TilingError::PoolParse {
                line: 1,
                reason: "bad".to_string()
            }
            .is_configuration_error()
        );
    }
}
