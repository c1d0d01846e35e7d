fn main() {
    aegis_notice::run_cli();
}
