// src/base777.rs
// Short identifier: the rank written big-endian in base 777.
//
// Symbols take one or two UTF-8 bytes, so a short id trades ASCII safety for
// length: 25 symbols instead of 40 for the default version.

use crate::error::{HoshError, Result};
use crate::groups::GroupVersion;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use std::collections::HashMap;
use std::sync::OnceLock;

const RADIX: u32 = 777;

const ALPHABET: &str = concat!(
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyzµÀ",
    "ÁÂÃÄÅÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞßàáâãäåçèéêëìíîïðñòóôõöøùúûüýþÿĀāĂăĄ",
    "ąĆćĈĉĊċČčĎďĐđĒēĔĕĖėĘęĚěĜĝĞğĠġĢģĤĥĦħĨĩĪīĬĭĮįİıĴĵĶķĸĹĺĻĽĿŁłŃńŅņŇňŉ",
    "ŊŋŌōŎŏŐőŔŕŖŗŘřŚśŜŝŞşŠšŢţŤťŦŧŨũŪūŬŭŮůŰűŲųŴŵŶŷŸŹźŻżŽžſƀƁƂƃƄƅƆƇƈƉƊƋ",
    "ƌƍƎƏƐƑƓƕƖƗƘƙƚƛƜƝƞƟƠơƢƣƤƥƦƧƨƩƪƫƬƭƮƯưƱƲƳƴƵƶƹƺƻƼƽƾƿǍǎǏǐǑǒǓǔǕǖǗǘǙǚǛǜ",
    "ǝǞǟǠǡǦǧǨǩǪǫǬǭǮǯǰǴǵǸǹǾǿȀȁȂȃȄȅȆȇȈȉȊȋȌȍȎȏȐȑȒȓȔȕȖȗȘșȚțȞȟȠȤȥȦȧȨȩȪȫȬȭȮ",
    "ȯȰȱȲȳȽɃɄɅɆɌɍɐɑɒɓɔɕɖɗɘəɚɛɜɝɞɟɠɡɢɣɤɥɦɧɨɪɫɬɯɰɱɲɳɴɵɷɸʀʁʂʉʊʋʌʍʎʏʐʑʒʓʘ",
    "ʙʚʛʜʝʞʟʠͶͷͻͼͽͿΆΈΉΊΌΎΏΐΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩΪΫάέήίΰαβγδεζηθικλ",
    "μνξοπρςστυφχψωϊϋόύώϒϓϔϕϖϘϙϜϤϫϰϱϲϳϴϵϷϸϹϺϻϼϽϾϿЀЁЂЃЄЅІЇЈЋЌЍЎЏАБВГДЕ",
    "ЖЗИЙКЛМНОПРСТУФХЧШЪЬЭЯабвгдежзийклмнопрстуфхчшъьэяѐёђѓєѕіїјћќѝўџ",
    "ѢѣѲѳҐґҒғҖҗҘҙҪҫҮүҰұҲҳҺһӀӁӂӏӐӑӒӓӖӗӘәӚӛӜӝӞӟӠӡӢӣӤӥӦӧӨөӪӫӬӭӮӯӰӱӲӳԀԐԑԚ",
    "ԛԜԝԱԲԳԴԵԶԷԸԹԺԻԼԽԾԿՀՁՂՃՄՅՆՇՈՉՊՋՌՍՎՏՐՑՒՓՔՕՖաբգդեզէըթժիխծկհձղճմնոպռ",
    "սվտրցւփօև",
);

struct Table {
    symbols: Vec<char>,
    reverse: HashMap<char, u32>,
}

static TABLE: OnceLock<Table> = OnceLock::new();

fn table() -> &'static Table {
    TABLE.get_or_init(|| {
        let symbols: Vec<char> = ALPHABET.chars().collect();
        let reverse = symbols
            .iter()
            .enumerate()
            .map(|(v, &c)| (c, v as u32))
            .collect();
        Table { symbols, reverse }
    })
}

fn enc(num: &BigUint, digits: usize) -> String {
    let symbols = &table().symbols;
    let radix = BigUint::from(RADIX);
    let mut rest = num.clone();
    let mut reversed = Vec::with_capacity(digits);
    while !rest.is_zero() {
        let (q, r) = rest.div_rem(&radix);
        let d = r.iter_u32_digits().next().unwrap_or(0) as usize;
        reversed.push(symbols[d]);
        rest = q;
    }
    while reversed.len() < digits {
        reversed.push('0');
    }
    reversed.into_iter().rev().collect()
}

fn dec(sid: &str) -> Option<BigUint> {
    let reverse = &table().reverse;
    sid.chars().try_fold(BigUint::zero(), |acc, c| {
        reverse.get(&c).map(|&v| acc * RADIX + v)
    })
}

pub fn sid_from_rank(n: &BigUint, version: &GroupVersion) -> String {
    enc(n, version.sid_len())
}

/// Parses a short id; its symbol count selects the version.
pub fn rank_from_sid(sid: &str) -> Result<(&'static GroupVersion, BigUint)> {
    let len = sid.chars().count();
    let version = GroupVersion::all()
        .iter()
        .find(|v| v.sid_len() == len)
        .ok_or_else(|| {
            HoshError::WrongIdentifier(format!("Wrong short identifier length: {len}   sid:[{sid}]"))
        })?;
    let n = dec(sid)
        .ok_or_else(|| HoshError::WrongIdentifier(format!("Invalid symbol in sid:[{sid}]")))?;
    if n >= version.p6 {
        return Err(HoshError::WrongIdentifier(format!(
            "Short identifier outside the group order: sid:[{sid}]"
        )));
    }
    Ok((version, n))
}
