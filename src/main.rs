fn main() {
    #[cfg(feature = "csr")]
    property_listings::mount();
}
