mod documents;
mod entities;
mod export;
