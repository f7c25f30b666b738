pub mod cache;
pub mod dataset;
pub mod pixabay;
pub mod remote;

pub use cache::CachedImageSource;
pub use dataset::FileWordSource;
pub use pixabay::PixabayClient;
pub use remote::RemoteSource;
