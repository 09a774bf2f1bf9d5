fn main() {
    dune_prune::cli::run();
}
