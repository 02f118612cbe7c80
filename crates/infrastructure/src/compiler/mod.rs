mod clash;
mod dns;
mod proxies;

pub use clash::ClashConfigCompiler;
