fn main() -> anyhow::Result<()> {
    logsift::run()
}
