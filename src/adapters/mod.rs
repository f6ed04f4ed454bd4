mod giphy_gif_provider;

pub use giphy_gif_provider::GiphyGifProvider;
