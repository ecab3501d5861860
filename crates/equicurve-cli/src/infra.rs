use equicurve_domain::repositories::artifacts::{ArtifactReader, ArtifactWriter};
use equicurve_domain::repositories::market_data::MarketDataRepository;
use equicurve_domain::repositories::predictions::PredictionRepository;
use equicurve_infrastructure::artifacts::{FilesystemArtifactReader, FilesystemArtifactWriter};
use equicurve_infrastructure::market_data::CsvMarketDataRepository;
use equicurve_infrastructure::predictions::FilesystemPredictionRepository;

pub struct SimulationDeps {
    pub market_data: Box<dyn MarketDataRepository>,
    pub predictions: Box<dyn PredictionRepository>,
    pub artifacts: Box<dyn ArtifactWriter>,
}

pub struct ValidateDeps {
    pub market_data: Box<dyn MarketDataRepository>,
    pub predictions: Box<dyn PredictionRepository>,
}

pub struct ReportingDeps {
    pub reader: Box<dyn ArtifactReader>,
    pub writer: Box<dyn ArtifactWriter>,
}

pub fn build_simulation_deps() -> SimulationDeps {
    SimulationDeps {
        market_data: Box::new(CsvMarketDataRepository::new()),
        predictions: Box::new(FilesystemPredictionRepository::new()),
        artifacts: Box::new(FilesystemArtifactWriter::new()),
    }
}

pub fn build_validate_deps() -> ValidateDeps {
    ValidateDeps {
        market_data: Box::new(CsvMarketDataRepository::new()),
        predictions: Box::new(FilesystemPredictionRepository::new()),
    }
}

pub fn build_reporting_deps() -> ReportingDeps {
    ReportingDeps {
        reader: Box::new(FilesystemArtifactReader::new()),
        writer: Box::new(FilesystemArtifactWriter::new()),
    }
}
