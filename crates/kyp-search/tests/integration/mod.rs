mod fallback;
mod keyword_search;
mod store_search;
