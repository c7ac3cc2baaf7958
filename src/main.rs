fn main() -> anyhow::Result<()> {
    hc_lector_lib::run()
}
