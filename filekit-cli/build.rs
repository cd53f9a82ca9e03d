use clap::CommandFactory;

#[allow(dead_code)]
#[path = "src/cli/mod.rs"]
mod cli;

fn render_man(out_dir: &std::path::Path, name: &str, cmd: clap::Command) -> std::io::Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;

    std::fs::write(out_dir.join(format!("{name}.1")), buffer)
}

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli");

    let out_dir =
        std::path::PathBuf::from(std::env::var_os("OUT_DIR").ok_or(std::io::ErrorKind::NotFound)?);

    render_man(&out_dir, "img2pdf", cli::Img2PdfCli::command())?;
    render_man(&out_dir, "pdf2img", cli::Pdf2ImgCli::command())?;
    render_man(&out_dir, "pdfsplit", cli::PdfSplitCli::command())?;
    render_man(&out_dir, "rename-files", cli::RenameCli::command())?;
    Ok(())
}
