use crate::{error::Error, geodesy::GeoPoint, metadata::MetadataRecord};

/// Any dataset storage should implement the [DatasetSource] trait,
/// to be served as a [Dataset](crate::prelude::Dataset).
///
/// [DatasetSource::metadata] and [DatasetSource::track] are requested once,
/// when the [Dataset](crate::prelude::Dataset) is built.
/// [DatasetSource::snapshot] is requested each time a snapshot is accessed and may
/// be called from several threads, if the source is [Sync].
pub trait DatasetSource {
    /// Provide the dataset description.
    fn metadata(&self) -> Result<MetadataRecord, Error>;

    /// Provide the ground truth track nodes, in travel order, if this dataset
    /// has a ground truth track. When the track was split into several parts,
    /// they should be concatenated in order.
    /// Datasets without a track are expected to describe a static
    /// location in their [MetadataRecord].
    fn track(&self) -> Result<Option<Vec<GeoPoint>>, Error>;

    /// Provide the packed bytes of snapshot `file`, as listed in [MetadataRecord].
    fn snapshot(&self, file: &str) -> Result<Vec<u8>, Error>;
}

impl<S: DatasetSource + ?Sized> DatasetSource for &S {
    fn metadata(&self) -> Result<MetadataRecord, Error> {
        (**self).metadata()
    }

    fn track(&self) -> Result<Option<Vec<GeoPoint>>, Error> {
        (**self).track()
    }

    fn snapshot(&self, file: &str) -> Result<Vec<u8>, Error> {
        (**self).snapshot(file)
    }
}
