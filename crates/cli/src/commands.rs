//! Subcommand definitions and their implementations

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use ecrypt::algorithms::CurveInfo;
use ecrypt::params::ALL_PARAMS;
use ecrypt::prelude::*;
use rand::rngs::OsRng;
use serde::Serialize;
use tracing::{debug, info, warn};

const PRIVATE_KEY_FILE: &str = "private.pem";
const PUBLIC_KEY_FILE: &str = "public.pem";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a key pair
    Keygen(KeygenArgs),
    /// Encrypt a message to a public key
    Encrypt(EncryptArgs),
    /// Decrypt an envelope with a private key
    Decrypt(DecryptArgs),
    /// Show curve and parameter details of a key
    Info(InfoArgs),
    /// List supported curves and their default ECIES parameters
    Curves,
}

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Curve (p256, p384, p521, k256)
    #[arg(long, env = "ECRYPT_CURVE", default_value_t = DEFAULT_CURVE, value_parser = parse_curve)]
    curve: Curve,

    /// Check that this ECIES bundle fits the curve. PEM files do not record
    /// the bundle, so pass the same --params to encrypt and decrypt.
    #[arg(long, value_parser = parse_params)]
    params: Option<&'static EciesParams>,

    /// Directory receiving private.pem and public.pem
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print both keys as JSON instead of writing files
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Recipient public key (PEM)
    #[arg(long)]
    key: PathBuf,

    /// Message text
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    text: Option<String>,

    /// File holding the message bytes
    #[arg(long)]
    input: Option<PathBuf>,

    /// ECIES bundle, e.g. aes256-sha256 (default: the key's curve default)
    #[arg(long, env = "ECRYPT_PARAMS", value_parser = parse_params)]
    params: Option<&'static EciesParams>,

    /// Shared information mixed into the key derivation
    #[arg(long, env = "ECRYPT_S1")]
    s1: Option<String>,

    /// Shared information passed to the MAC
    #[arg(long, env = "ECRYPT_S2")]
    s2: Option<String>,

    /// Write the envelope here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Recipient private key (PEM)
    #[arg(long)]
    key: PathBuf,

    /// File holding the Base64 envelope
    #[arg(long)]
    input: PathBuf,

    /// ECIES bundle the envelope was produced with
    #[arg(long, env = "ECRYPT_PARAMS", value_parser = parse_params)]
    params: Option<&'static EciesParams>,

    /// Shared information mixed into the key derivation
    #[arg(long, env = "ECRYPT_S1")]
    s1: Option<String>,

    /// Shared information passed to the MAC
    #[arg(long, env = "ECRYPT_S2")]
    s2: Option<String>,

    /// Print `{"text": ...}` instead of the raw plaintext
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Private or public key (PEM)
    #[arg(long)]
    key: PathBuf,
}

fn parse_curve(s: &str) -> std::result::Result<Curve, String> {
    s.parse().map_err(|e: ecrypt::params::UnknownCurve| e.to_string())
}

fn parse_params(s: &str) -> std::result::Result<&'static EciesParams, String> {
    EciesParams::by_name(s).ok_or_else(|| {
        let known: Vec<&str> = ALL_PARAMS.iter().map(|p| p.id).collect();
        format!("unknown ECIES parameters (expected one of {})", known.join(", "))
    })
}

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Keygen(args) => keygen(args),
        Command::Encrypt(args) => encrypt_cmd(args),
        Command::Decrypt(args) => decrypt_cmd(args),
        Command::Info(args) => info_cmd(args),
        Command::Curves => {
            for line in curve_table() {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// PEM-encoded key pair, the shape printed by `keygen --json`.
#[derive(Serialize, Debug)]
pub struct KeyPairPem {
    pub public: String,
    pub private: String,
}

fn generate_pem_pair(curve: Curve, params: Option<&'static EciesParams>) -> Result<KeyPairPem> {
    let sk = generate_key(&mut OsRng, curve, params).context("generating key pair")?;
    let private = export_private_pem(&sk).context("encoding private key")?;
    let public = export_public_pem(sk.public_key()).context("encoding public key")?;
    Ok(KeyPairPem {
        public,
        private: private.to_string(),
    })
}

fn keygen(args: KeygenArgs) -> Result<()> {
    if let Some(params) = args.params {
        if !params.fits(args.curve) {
            bail!(
                "{} needs {} bytes of shared secret but {} only provides {}",
                params.name,
                params.derived_key_len(),
                args.curve,
                args.curve.field_size()
            );
        }
    }

    if let Some(params) = args.params {
        warn!(
            params = params.name,
            "PEM keys do not record the ECIES bundle; pass --params to encrypt and decrypt"
        );
    }

    let pair = generate_pem_pair(args.curve, args.params)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&pair)?);
        return Ok(());
    }

    let (private_path, public_path) = write_key_pair(&args.out_dir, &pair)?;
    info!(curve = args.curve.name(), dir = %args.out_dir.display(), "wrote key pair");
    println!("{}", private_path.display());
    println!("{}", public_path.display());
    Ok(())
}

/// Write `private.pem` (owner-only on unix) and `public.pem` into `dir`.
fn write_key_pair(dir: &Path, pair: &KeyPairPem) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let private_path = dir.join(PRIVATE_KEY_FILE);
    let public_path = dir.join(PUBLIC_KEY_FILE);
    write_private_file(&private_path, pair.private.as_bytes())?;
    write_file(&public_path, pair.public.as_bytes())?;
    Ok((private_path, public_path))
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

fn write_private_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options
        .open(path)
        .with_context(|| format!("creating {}", path.display()))?;

    // The creation mode is ignored when the file already exists.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .with_context(|| format!("restricting {}", path.display()))?;
    }

    file.write_all(contents)
        .with_context(|| format!("writing {}", path.display()))
}

/// Encrypt `plaintext` to the key in `public_pem`.
///
/// `params` overrides the curve's default bundle.
pub fn encrypt_with_pem(
    public_pem: &str,
    plaintext: &[u8],
    params: Option<&'static EciesParams>,
    s1: Option<&str>,
    s2: Option<&str>,
) -> Result<String> {
    let mut public = import_public_pem(public_pem).context("parsing public key")?;
    if params.is_some() {
        public = public.with_params(params);
    }
    let envelope = encrypt(
        &mut OsRng,
        &public,
        plaintext,
        s1.map(str::as_bytes),
        s2.map(str::as_bytes),
    )
    .context("encrypting message")?;
    Ok(envelope)
}

/// Decrypt a Base64 envelope with the key in `private_pem`.
pub fn decrypt_with_pem(
    private_pem: &str,
    envelope: &str,
    params: Option<&'static EciesParams>,
    s1: Option<&str>,
    s2: Option<&str>,
) -> Result<Vec<u8>> {
    let mut private = import_private_pem(private_pem).context("parsing private key")?;
    if params.is_some() {
        private = private.with_params(params);
    }
    let plaintext = private
        .decrypt(envelope.trim(), s1.map(str::as_bytes), s2.map(str::as_bytes))
        .context("decrypting envelope")?;
    Ok(plaintext)
}

fn encrypt_cmd(args: EncryptArgs) -> Result<()> {
    let public_pem = read_to_string(&args.key)?;
    let plaintext = match (&args.text, &args.input) {
        (Some(text), _) => text.clone().into_bytes(),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("reading {}", path.display()))?
        }
        (None, None) => bail!("either --text or --input is required"),
    };

    let envelope = encrypt_with_pem(
        &public_pem,
        &plaintext,
        args.params,
        args.s1.as_deref(),
        args.s2.as_deref(),
    )?;
    debug!(envelope_len = envelope.len(), "encrypted message");

    match &args.output {
        Some(path) => write_file(path, envelope.as_bytes()),
        None => {
            println!("{}", envelope);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct DecryptedText {
    text: String,
}

fn decrypt_cmd(args: DecryptArgs) -> Result<()> {
    let private_pem = read_to_string(&args.key)?;
    let envelope = read_to_string(&args.input)?;
    let plaintext = decrypt_with_pem(
        &private_pem,
        &envelope,
        args.params,
        args.s1.as_deref(),
        args.s2.as_deref(),
    )?;

    if args.json {
        let out = DecryptedText {
            text: String::from_utf8_lossy(&plaintext).into_owned(),
        };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&plaintext)?;
        stdout.flush()?;
    }
    Ok(())
}

/// Curve and parameter summary of a key, the `info` output.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct KeyInfo {
    pub curve: &'static str,
    pub bits: usize,
    pub order: String,
    pub generator: String,
    pub x: String,
    pub y: String,
    pub params: Option<&'static str>,
    pub block_size: Option<usize>,
    pub key_len: Option<usize>,
    pub private: bool,
}

pub fn describe(public: &PublicKey, private: bool) -> KeyInfo {
    let curve = public.curve();
    let domain = CurveInfo::of(curve);
    let (x, y) = public.coordinates();
    let params = public.params();
    KeyInfo {
        curve: curve.name(),
        bits: curve.bit_size(),
        order: domain.order_hex,
        generator: hex::encode(&domain.generator),
        x: hex::encode(&x),
        y: hex::encode(&y),
        params: params.map(|p| p.name),
        block_size: params.map(|p| p.block_size),
        key_len: params.map(|p| p.key_len),
        private,
    }
}

fn info_cmd(args: InfoArgs) -> Result<()> {
    let pem = read_to_string(&args.key)?;
    let info = match import_private_pem(&pem) {
        Ok(sk) => describe(sk.public_key(), true),
        Err(_) => describe(
            &import_public_pem(&pem).context("parsing key")?,
            false,
        ),
    };

    println!("kind:        {}", if info.private { "private" } else { "public" });
    println!("curve:       {} ({} bits)", info.curve, info.bits);
    println!("order:       {}", info.order);
    println!("generator:   {}", info.generator);
    println!("public x:    {}", info.x);
    println!("public y:    {}", info.y);
    match (info.params, info.block_size, info.key_len) {
        (Some(name), Some(block_size), Some(key_len)) => {
            println!("ecies:       {}", name);
            println!("block size:  {}", block_size);
            println!("key length:  {}", key_len);
        }
        _ => println!("ecies:       none registered for this curve"),
    }
    Ok(())
}

pub fn curve_table() -> Vec<String> {
    Curve::ALL
        .iter()
        .map(|curve| {
            let params = params_for_curve(*curve).map_or("-", |p| p.name);
            format!("{:<10} {:>3} bits  {}", curve.name(), curve.bit_size(), params)
        })
        .collect()
}
