fn main() {
    dog_finder_pwa::run();
}
