use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::{FEATURE_COUNT, FeatureVector};
use crate::domain::ports::{LoadedModels, ModelStore};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

pub const SCALER_FILE: &str = "scaler.json";
pub const REGRESSION_FILE: &str = "sales_regression.json";
pub const CLASSIFIER_FILE: &str = "profit_classifier.json";

pub type SalesRegressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;
pub type ProfitClassifier = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// Fitted standard-scaler parameters: `(x - mean) / scale` per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScalerParams {
    pub fn check_dimensions(&self) -> Result<(), ModelError> {
        for len in [self.mean.len(), self.scale.len()] {
            if len != FEATURE_COUNT {
                return Err(ModelError::Dimension {
                    expected: FEATURE_COUNT,
                    actual: len,
                });
            }
        }
        Ok(())
    }

    /// A zero scale leaves the centred value unscaled.
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>, ModelError> {
        if values.len() != self.mean.len() {
            return Err(ModelError::Dimension {
                expected: self.mean.len(),
                actual: values.len(),
            });
        }

        Ok(values
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| {
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect())
    }
}

/// The three pre-trained artifacts, deserialized from JSON.
pub struct SmartcoreModelStore {
    scaler: StandardScalerParams,
    regressor: SalesRegressor,
    classifier: ProfitClassifier,
}

impl SmartcoreModelStore {
    pub fn new(
        scaler: StandardScalerParams,
        regressor: SalesRegressor,
        classifier: ProfitClassifier,
    ) -> Result<Self, ModelError> {
        scaler.check_dimensions()?;
        Ok(Self {
            scaler,
            regressor,
            classifier,
        })
    }

    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let scaler: StandardScalerParams = read_artifact(&dir.join(SCALER_FILE))?;
        let regressor: SalesRegressor = read_artifact(&dir.join(REGRESSION_FILE))?;
        let classifier: ProfitClassifier = read_artifact(&dir.join(CLASSIFIER_FILE))?;
        Self::new(scaler, regressor, classifier)
    }

    fn single_row(scaled: &[f64]) -> Result<DenseMatrix<f64>, ModelError> {
        DenseMatrix::from_2d_vec(&vec![scaled.to_vec()])
            .map_err(|e| ModelError::Inference(format!("Matrix creation failed: {}", e)))
    }
}

/// Loads the artifacts from `dir`. Never fails: a load error becomes
/// `LoadedModels::Unavailable` so the rest of the dashboard keeps working.
pub fn load_models(dir: &Path) -> LoadedModels {
    match SmartcoreModelStore::load(dir) {
        Ok(store) => {
            info!("Successfully loaded prediction models from {:?}", dir);
            LoadedModels::Ready(Arc::new(store))
        }
        Err(e) => {
            error!("Model files not found or invalid in {:?}: {}", dir, e);
            LoadedModels::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let file = File::open(path).map_err(|e| ModelError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| ModelError::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

impl ModelStore for SmartcoreModelStore {
    fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        self.scaler.transform(features.as_slice())
    }

    fn predict_regression(&self, scaled: &[f64]) -> Result<f64, ModelError> {
        let input = Self::single_row(scaled)?;
        let predictions = self
            .regressor
            .predict(&input)
            .map_err(|e| ModelError::Inference(format!("Regression failed: {}", e)))?;
        predictions
            .first()
            .copied()
            .ok_or_else(|| ModelError::Inference("No regression output returned".to_string()))
    }

    fn predict_classification(&self, scaled: &[f64]) -> Result<i64, ModelError> {
        let input = Self::single_row(scaled)?;
        let labels = self
            .classifier
            .predict(&input)
            .map_err(|e| ModelError::Inference(format!("Classification failed: {}", e)))?;
        labels
            .first()
            .map(|label| i64::from(*label))
            .ok_or_else(|| ModelError::Inference("No class label returned".to_string()))
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}
