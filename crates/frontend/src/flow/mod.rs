pub mod google_docs_read;
